//! Stage management service.

use std::sync::Arc;

use crate::api::dto::stage::{
    CREATE_STAGE_RULES, CreateStageRequest, UPDATE_STAGE_RULES, UpdateStageRequest,
};
use crate::domain::entities::Stage;
use crate::domain::repositories::{RecordStore, StageRepository};
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;
use serde_json::json;

/// Validates and persists trail stages.
pub struct StageService {
    stages: Arc<dyn StageRepository>,
    store: Arc<dyn RecordStore>,
}

impl StageService {
    pub fn new(stages: Arc<dyn StageRepository>, store: Arc<dyn RecordStore>) -> Self {
        Self { stages, store }
    }

    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<(Vec<Stage>, i64), AppError> {
        let stages = self.stages.list(offset, limit, sort).await?;
        let total = self.stages.count().await?;
        Ok((stages, total))
    }

    pub async fn get(&self, id: i64) -> Result<Stage, AppError> {
        self.stages
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Stage not found", json!({ "id": id })))
    }

    /// Runs format and composite validation, then creates the stage.
    pub async fn create(&self, request: CreateStageRequest) -> Result<Stage, AppError> {
        validator::Validate::validate(&request)?;
        CREATE_STAGE_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        self.stages.create(request.into_record()?).await
    }

    pub async fn update(&self, id: i64, request: UpdateStageRequest) -> Result<Stage, AppError> {
        validator::Validate::validate(&request)?;
        UPDATE_STAGE_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        if self.stages.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Stage not found", json!({ "id": id })));
        }
        self.stages.update(id, request.into_patch()?).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.stages.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Stage not found", json!({ "id": id })))
        }
    }
}
