//! Repository trait for trail stages.

use crate::domain::entities::{NewStage, Stage, StagePatch};
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;
use async_trait::async_trait;

/// Repository interface for stage records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStageRepository`] - PostgreSQL implementation
/// - In-memory fakes in the integration test suite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StageRepository: Send + Sync {
    /// Lists stages with pagination and an optional ordering directive.
    ///
    /// An [`SortDirective::Unsorted`] directive applies no ordering beyond
    /// the database's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<Vec<Stage>, AppError>;

    /// Counts all stages.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds a stage by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Stage>, AppError>;

    /// Creates a new stage.
    async fn create(&self, new_stage: NewStage) -> Result<Stage, AppError>;

    /// Partially updates a stage. Only `Some` fields in the patch change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no stage matches `id`.
    async fn update(&self, id: i64, patch: StagePatch) -> Result<Stage, AppError>;

    /// Deletes a stage. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
