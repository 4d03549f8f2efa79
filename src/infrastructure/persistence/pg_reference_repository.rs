//! PostgreSQL implementation of the reference-data repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Locale, Policy, Region};
use crate::domain::repositories::ReferenceRepository;
use crate::error::AppError;

/// PostgreSQL read access to seeded reference collections.
pub struct PgReferenceRepository {
    pool: Arc<PgPool>,
}

impl PgReferenceRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceRepository for PgReferenceRepository {
    async fn regions(&self) -> Result<Vec<Region>, AppError> {
        let regions = sqlx::query_as::<_, Region>("SELECT * FROM regions ORDER BY code")
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(regions)
    }

    async fn region_by_id(&self, id: i64) -> Result<Option<Region>, AppError> {
        let region = sqlx::query_as::<_, Region>("SELECT * FROM regions WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(region)
    }

    async fn locales(&self) -> Result<Vec<Locale>, AppError> {
        let locales = sqlx::query_as::<_, Locale>("SELECT * FROM locales ORDER BY code")
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(locales)
    }

    async fn policies(&self) -> Result<Vec<Policy>, AppError> {
        let policies = sqlx::query_as::<_, Policy>("SELECT * FROM policies ORDER BY kind")
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(policies)
    }

    async fn policy_by_kind(&self, kind: &str) -> Result<Option<Policy>, AppError> {
        let policy = sqlx::query_as::<_, Policy>("SELECT * FROM policies WHERE kind = $1")
            .bind(kind)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(policy)
    }
}
