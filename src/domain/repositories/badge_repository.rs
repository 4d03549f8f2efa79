//! Repository trait for stage badges.

use crate::domain::entities::{Badge, NewBadge};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for badge records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeRepository: Send + Sync {
    /// Lists all badges.
    async fn list(&self) -> Result<Vec<Badge>, AppError>;

    /// Finds a badge by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Badge>, AppError>;

    /// Creates a new badge.
    async fn create(&self, new_badge: NewBadge) -> Result<Badge, AppError>;

    /// Deletes a badge, returning the removed record so the caller can also
    /// drop its artwork from object storage. `None` when not found.
    async fn delete(&self, id: i64) -> Result<Option<Badge>, AppError>;
}
