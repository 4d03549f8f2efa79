//! Badge DTOs. A badge for a nonexistent stage is a 404, not a 400: the
//! stage id comes from the admin's navigation context, not form input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::collection::Collection;
use crate::domain::entities::{Badge, NewBadge};
use crate::domain::repositories::{FieldValue, RecordStore};
use crate::validation::engine::{ConstraintError, ConstraintTable};
use crate::validation::exists::Exists;

/// Request to create a badge.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBadgeRequest {
    pub stage_id: i64,

    #[validate(length(min = 1, max = 60, message = "name must be 1-60 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "image_key is required"))]
    pub image_key: String,
}

fn stage_exists<'a>(
    dto: &'a CreateBadgeRequest,
    store: &'a dyn RecordStore,
) -> futures::future::BoxFuture<'a, Result<bool, ConstraintError>> {
    Box::pin(async move {
        Exists::new(Collection::Stage)
            .or_not_found()
            .check(store, Some(&FieldValue::Int(dto.stage_id)))
            .await
    })
}

/// Composite rules for [`CreateBadgeRequest`].
pub static CREATE_BADGE_RULES: LazyLock<ConstraintTable<CreateBadgeRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new().async_rule("stage_id", "stage does not exist", stage_exists)
    });

impl CreateBadgeRequest {
    pub fn into_record(self) -> NewBadge {
        NewBadge {
            stage_id: self.stage_id,
            name: self.name,
            image_key: self.image_key,
        }
    }
}

/// Outbound badge representation.
#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub id: i64,
    pub stage_id: i64,
    pub name: String,
    pub image_key: String,
    pub created_at: DateTime<Utc>,
}

impl From<Badge> for BadgeResponse {
    fn from(b: Badge) -> Self {
        Self {
            id: b.id,
            stage_id: b.stage_id,
            name: b.name,
            image_key: b.image_key,
            created_at: b.created_at,
        }
    }
}
