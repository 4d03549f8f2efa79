//! PostgreSQL implementation of the pass repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPass, Pass};
use crate::domain::repositories::PassRepository;
use crate::error::AppError;

/// PostgreSQL repository for pass bookings.
pub struct PgPassRepository {
    pool: Arc<PgPool>,
}

impl PgPassRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassRepository for PgPassRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Pass>, AppError> {
        let passes = sqlx::query_as::<_, Pass>(
            "SELECT * FROM passes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(passes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pass>, AppError> {
        let pass = sqlx::query_as::<_, Pass>("SELECT * FROM passes WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(pass)
    }

    async fn create(&self, new_pass: NewPass) -> Result<Pass, AppError> {
        let pass = sqlx::query_as::<_, Pass>(
            r#"
            INSERT INTO passes (user_id, stage_ids, starts_on, days, status)
            VALUES ($1, $2, $3, $4, 'reserved')
            RETURNING *
            "#,
        )
        .bind(new_pass.user_id)
        .bind(new_pass.stage_ids)
        .bind(new_pass.starts_on)
        .bind(new_pass.days)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(pass)
    }

    async fn cancel(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE passes SET status = 'cancelled'
            WHERE id = $1 AND user_id = $2 AND status IN ('reserved', 'active')
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
