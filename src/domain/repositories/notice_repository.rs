//! Repository trait for notices.

use crate::domain::entities::{NewNotice, Notice, NoticePatch};
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;
use async_trait::async_trait;

/// Repository interface for announcement records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Lists notices with pagination and an optional ordering directive.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<Vec<Notice>, AppError>;

    /// Finds a notice by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Notice>, AppError>;

    /// Creates a new notice.
    async fn create(&self, new_notice: NewNotice) -> Result<Notice, AppError>;

    /// Partially updates a notice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no notice matches `id`.
    async fn update(&self, id: i64, patch: NoticePatch) -> Result<Notice, AppError>;

    /// Deletes a notice. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
