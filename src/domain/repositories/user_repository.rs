//! Repository trait for user profiles.

use crate::domain::entities::{User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for profile records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Partially updates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError>;
}
