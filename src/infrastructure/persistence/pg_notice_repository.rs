//! PostgreSQL implementation of the notice repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewNotice, Notice, NoticePatch};
use crate::domain::repositories::NoticeRepository;
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;

/// PostgreSQL repository for notices.
pub struct PgNoticeRepository {
    pool: Arc<PgPool>,
}

impl PgNoticeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for PgNoticeRepository {
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<Vec<Notice>, AppError> {
        // Notices have no sortable relations; a relation directive cannot be
        // produced for this collection and falls back to unsorted.
        let order = match sort {
            SortDirective::Field { field, order } => {
                format!(" ORDER BY {} {}", field, order.as_sql())
            }
            _ => String::new(),
        };
        let sql = format!("SELECT * FROM notices{order} LIMIT $1 OFFSET $2");

        let notices = sqlx::query_as::<_, Notice>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(notices)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notice>, AppError> {
        let notice = sqlx::query_as::<_, Notice>("SELECT * FROM notices WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(notice)
    }

    async fn create(&self, new_notice: NewNotice) -> Result<Notice, AppError> {
        let notice = sqlx::query_as::<_, Notice>(
            "INSERT INTO notices (title, content) VALUES ($1, $2) RETURNING *",
        )
        .bind(new_notice.title)
        .bind(new_notice.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(notice)
    }

    async fn update(&self, id: i64, patch: NoticePatch) -> Result<Notice, AppError> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            UPDATE notices SET
                title   = COALESCE($2, title),
                content = COALESCE($3, content)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .fetch_optional(self.pool.as_ref())
        .await?;

        notice.ok_or_else(|| AppError::not_found("Notice not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
