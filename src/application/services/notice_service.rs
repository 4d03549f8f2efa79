//! Notice management service.

use std::sync::Arc;

use crate::api::dto::notice::{
    CREATE_NOTICE_RULES, CreateNoticeRequest, UPDATE_NOTICE_RULES, UpdateNoticeRequest,
};
use crate::domain::entities::Notice;
use crate::domain::repositories::{NoticeRepository, RecordStore};
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;
use serde_json::json;

pub struct NoticeService {
    notices: Arc<dyn NoticeRepository>,
    store: Arc<dyn RecordStore>,
}

impl NoticeService {
    pub fn new(notices: Arc<dyn NoticeRepository>, store: Arc<dyn RecordStore>) -> Self {
        Self { notices, store }
    }

    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<Vec<Notice>, AppError> {
        self.notices.list(offset, limit, sort).await
    }

    pub async fn get(&self, id: i64) -> Result<Notice, AppError> {
        self.notices
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice not found", json!({ "id": id })))
    }

    pub async fn create(&self, request: CreateNoticeRequest) -> Result<Notice, AppError> {
        validator::Validate::validate(&request)?;
        CREATE_NOTICE_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        self.notices.create(request.into_record()).await
    }

    pub async fn update(&self, id: i64, request: UpdateNoticeRequest) -> Result<Notice, AppError> {
        validator::Validate::validate(&request)?;
        UPDATE_NOTICE_RULES
            .validate(&request, self.store.as_ref())
            .await?
            .into_result()?;

        if self.notices.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Notice not found", json!({ "id": id })));
        }
        self.notices.update(id, request.into_patch()).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.notices.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Notice not found", json!({ "id": id })))
        }
    }
}
