//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user profiles.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                nickname        = COALESCE($2, nickname),
                country_code    = COALESCE($3, country_code),
                phone_number    = COALESCE($4, phone_number),
                passport_number = COALESCE($5, passport_number)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.nickname)
        .bind(patch.country_code)
        .bind(patch.phone_number)
        .bind(patch.passport_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }
}
