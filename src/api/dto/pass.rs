//! Pass DTOs. Creating a pass checks every referenced stage exists.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::collection::Collection;
use crate::domain::entities::{NewPass, Pass, PassStatus};
use crate::domain::repositories::{FieldValue, RecordStore};
use crate::validation::engine::{ConstraintError, ConstraintTable};
use crate::validation::exists::Exists;

/// Request to book a pass.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePassRequest {
    #[validate(length(min = 1, message = "at least one stage is required"))]
    pub stage_ids: Vec<i64>,

    pub starts_on: NaiveDate,

    #[validate(range(min = 1, max = 30, message = "days must be 1-30"))]
    pub days: i16,
}

fn stages_exist<'a>(
    dto: &'a CreatePassRequest,
    store: &'a dyn RecordStore,
) -> futures::future::BoxFuture<'a, Result<bool, ConstraintError>> {
    Box::pin(async move {
        let ids: Vec<FieldValue> = dto.stage_ids.iter().copied().map(FieldValue::from).collect();
        Exists::new(Collection::Stage).check_all(store, &ids).await
    })
}

/// Composite rules for [`CreatePassRequest`].
pub static CREATE_PASS_RULES: LazyLock<ConstraintTable<CreatePassRequest>> =
    LazyLock::new(|| {
        ConstraintTable::new().async_rule("stage_ids", "stage does not exist", stages_exist)
    });

impl CreatePassRequest {
    pub fn into_record(self, user_id: i64) -> NewPass {
        NewPass {
            user_id,
            stage_ids: self.stage_ids,
            starts_on: self.starts_on,
            days: self.days,
        }
    }
}

/// Outbound pass representation.
#[derive(Debug, Serialize)]
pub struct PassResponse {
    pub id: i64,
    pub user_id: i64,
    pub stage_ids: Vec<i64>,
    pub starts_on: NaiveDate,
    pub days: i16,
    pub status: PassStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Pass> for PassResponse {
    fn from(p: Pass) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            stage_ids: p.stage_ids,
            starts_on: p.starts_on,
            days: p.days,
            status: p.status,
            created_at: p.created_at,
        }
    }
}
