//! PostgreSQL implementation of the stage repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStage, Stage, StagePatch};
use crate::domain::repositories::StageRepository;
use crate::error::AppError;
use crate::utils::parse_sort::SortDirective;

/// PostgreSQL repository for stage storage and retrieval.
pub struct PgStageRepository {
    pool: Arc<PgPool>,
}

impl PgStageRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Renders the ORDER BY clause for a directive. Field names are the
/// canonical statics out of the collection schema, safe to splice.
fn order_clause(sort: &SortDirective) -> String {
    match sort {
        SortDirective::Unsorted => String::new(),
        SortDirective::Field { field, order } => {
            format!(" ORDER BY s.{} {}", field, order.as_sql())
        }
        SortDirective::Relation { field, order, .. } => {
            format!(" ORDER BY r.{} {}", field, order.as_sql())
        }
    }
}

#[async_trait]
impl StageRepository for PgStageRepository {
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        sort: &SortDirective,
    ) -> Result<Vec<Stage>, AppError> {
        // The only relation reachable from the stage schema is the region.
        let join = match sort {
            SortDirective::Relation { .. } => " JOIN regions r ON r.id = s.region_id",
            _ => "",
        };
        let sql = format!(
            "SELECT s.* FROM stages s{}{} LIMIT $1 OFFSET $2",
            join,
            order_clause(sort)
        );

        let stages = sqlx::query_as::<_, Stage>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(stages)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stages")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Stage>, AppError> {
        let stage = sqlx::query_as::<_, Stage>("SELECT * FROM stages WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(stage)
    }

    async fn create(&self, new_stage: NewStage) -> Result<Stage, AppError> {
        let stage = sqlx::query_as::<_, Stage>(
            r#"
            INSERT INTO stages
                (region_id, name, distance_meters, duration_minutes,
                 open_time, close_time, difficulty, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new_stage.region_id)
        .bind(new_stage.name)
        .bind(new_stage.distance_meters)
        .bind(new_stage.duration_minutes)
        .bind(new_stage.open_time)
        .bind(new_stage.close_time)
        .bind(new_stage.difficulty)
        .bind(new_stage.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(stage)
    }

    async fn update(&self, id: i64, patch: StagePatch) -> Result<Stage, AppError> {
        let stage = sqlx::query_as::<_, Stage>(
            r#"
            UPDATE stages SET
                name             = COALESCE($2, name),
                distance_meters  = COALESCE($3, distance_meters),
                duration_minutes = COALESCE($4, duration_minutes),
                open_time        = COALESCE($5, open_time),
                close_time       = COALESCE($6, close_time),
                difficulty       = COALESCE($7, difficulty),
                description      = COALESCE($8, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.distance_meters)
        .bind(patch.duration_minutes)
        .bind(patch.open_time)
        .bind(patch.close_time)
        .bind(patch.difficulty)
        .bind(patch.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        stage.ok_or_else(|| AppError::not_found("Stage not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stages WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
