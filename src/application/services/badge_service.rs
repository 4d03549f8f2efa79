//! Badge management service.
//!
//! Deleting a badge also removes its artwork from object storage so no
//! orphaned media accumulates.

use std::sync::Arc;

use crate::api::dto::badge::{CREATE_BADGE_RULES, CreateBadgeRequest};
use crate::domain::entities::Badge;
use crate::domain::repositories::{BadgeRepository, RecordStore};
use crate::error::AppError;
use crate::infrastructure::storage::ObjectStorage;

pub struct BadgeService {
    badges: Arc<dyn BadgeRepository>,
    store: Arc<dyn RecordStore>,
    media: Arc<dyn ObjectStorage>,
}

impl BadgeService {
    pub fn new(
        badges: Arc<dyn BadgeRepository>,
        store: Arc<dyn RecordStore>,
        media: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self {
            badges,
            store,
            media,
        }
    }

    pub async fn list(&self) -> Result<Vec<Badge>, AppError> {
        self.badges.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Badge, AppError> {
        self.badges
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Badge not found", serde_json::json!({ "id": id })))
    }

    /// Validates and creates a badge. A nonexistent `stage_id` surfaces as
    /// a not-found error rather than a field failure.
    pub async fn create(&self, request: CreateBadgeRequest) -> Result<Badge, AppError> {
        validator::Validate::validate(&request)?;
        CREATE_BADGE_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        self.badges.create(request.into_record()).await
    }

    /// Deletes the badge row first, then its artwork object.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let Some(badge) = self.badges.delete(id).await? else {
            return Err(AppError::not_found(
                "Badge not found",
                serde_json::json!({ "id": id }),
            ));
        };

        self.media.delete_objects(&[badge.image_key]).await?;
        Ok(())
    }
}
