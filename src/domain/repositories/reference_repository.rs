//! Repository trait for seeded reference data.

use crate::domain::entities::{Locale, Policy, Region};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to reference collections maintained by the seeder.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    async fn regions(&self) -> Result<Vec<Region>, AppError>;

    async fn region_by_id(&self, id: i64) -> Result<Option<Region>, AppError>;

    async fn locales(&self) -> Result<Vec<Locale>, AppError>;

    async fn policies(&self) -> Result<Vec<Policy>, AppError>;

    /// Finds a policy by its kind (`terms`, `privacy`, `refund`).
    async fn policy_by_kind(&self, kind: &str) -> Result<Option<Policy>, AppError>;
}
