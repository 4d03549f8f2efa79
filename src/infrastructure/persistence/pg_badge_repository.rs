//! PostgreSQL implementation of the badge repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Badge, NewBadge};
use crate::domain::repositories::BadgeRepository;
use crate::error::AppError;

/// PostgreSQL repository for badges.
pub struct PgBadgeRepository {
    pool: Arc<PgPool>,
}

impl PgBadgeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BadgeRepository for PgBadgeRepository {
    async fn list(&self) -> Result<Vec<Badge>, AppError> {
        let badges = sqlx::query_as::<_, Badge>("SELECT * FROM badges ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(badges)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Badge>, AppError> {
        let badge = sqlx::query_as::<_, Badge>("SELECT * FROM badges WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(badge)
    }

    async fn create(&self, new_badge: NewBadge) -> Result<Badge, AppError> {
        let badge = sqlx::query_as::<_, Badge>(
            r#"
            INSERT INTO badges (stage_id, name, image_key)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new_badge.stage_id)
        .bind(new_badge.name)
        .bind(new_badge.image_key)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(badge)
    }

    async fn delete(&self, id: i64) -> Result<Option<Badge>, AppError> {
        let badge =
            sqlx::query_as::<_, Badge>("DELETE FROM badges WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;
        Ok(badge)
    }
}
