//! Repository trait for trail passes.

use crate::domain::entities::{NewPass, Pass};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pass bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PassRepository: Send + Sync {
    /// Lists all passes belonging to a user, newest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Pass>, AppError>;

    /// Finds a pass by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pass>, AppError>;

    /// Creates a new pass in the `reserved` state.
    async fn create(&self, new_pass: NewPass) -> Result<Pass, AppError>;

    /// Marks a pass cancelled. Returns `false` when the pass does not exist,
    /// belongs to another user, or is no longer cancellable.
    async fn cancel(&self, id: i64, user_id: i64) -> Result<bool, AppError>;
}
