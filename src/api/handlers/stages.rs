//! Handlers for stage endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::dto::stage::{CreateStageRequest, StageResponse, UpdateStageRequest};
use crate::api::dto::{Envelope, PaginationParams};
use crate::domain::Collection;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_sort::parse_sort;

/// Query parameters for stage listing, alongside [`PaginationParams`].
#[derive(Debug, Deserialize)]
pub struct ListStagesQuery {
    /// Ordering directive, e.g. `-difficulty` or `region,name`.
    pub sort: Option<String>,
    /// When set, rating counters are returned as a star histogram.
    #[serde(default)]
    pub star_counts: bool,
}

#[derive(Debug, Deserialize)]
pub struct GetStageQuery {
    #[serde(default)]
    pub star_counts: bool,
}

#[derive(Debug, Serialize)]
pub struct StageListResponse {
    pub stages: Vec<StageResponse>,
    pub total: i64,
}

/// Lists stages with pagination, ordering, and optional histogram ratings.
///
/// # Endpoint
///
/// `GET /api/stages?page=1&page_size=25&sort=-difficulty&star_counts=true`
///
/// An unrecognized `sort` value falls back to the insertion order rather
/// than rejecting the request.
pub async fn list_stages_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<ListStagesQuery>,
) -> Result<Envelope<StageListResponse>, AppError> {
    let (offset, limit) = pagination
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request("Invalid pagination", json!({ "reason": msg })))?;

    let sort = parse_sort(query.sort.as_deref(), Collection::Stage);
    let (stages, total) = state.stage_service.list(offset, limit, &sort).await?;

    Ok(Envelope::ok(StageListResponse {
        stages: stages
            .iter()
            .map(|s| StageResponse::from_record(s, query.star_counts))
            .collect(),
        total,
    }))
}

/// Returns a single stage.
///
/// # Endpoint
///
/// `GET /api/stages/{id}?star_counts=true`
pub async fn get_stage_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<GetStageQuery>,
) -> Result<Envelope<StageResponse>, AppError> {
    let stage = state.stage_service.get(id).await?;
    Ok(Envelope::ok(StageResponse::from_record(
        &stage,
        query.star_counts,
    )))
}

/// Creates a stage.
///
/// # Endpoint
///
/// `POST /api/stages`
///
/// # Errors
///
/// Returns 400 Bad Request when a field fails format validation, the
/// region does not exist, or the description exceeds its length cap.
pub async fn create_stage_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStageRequest>,
) -> Result<Envelope<StageResponse>, AppError> {
    let stage = state.stage_service.create(payload).await?;
    Ok(Envelope::created(StageResponse::from_record(&stage, false)))
}

/// Partially updates a stage.
///
/// # Endpoint
///
/// `PATCH /api/stages/{id}`
pub async fn update_stage_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStageRequest>,
) -> Result<Envelope<StageResponse>, AppError> {
    let stage = state.stage_service.update(id, payload).await?;
    Ok(Envelope::ok(StageResponse::from_record(&stage, false)))
}

/// Deletes a stage.
///
/// # Endpoint
///
/// `DELETE /api/stages/{id}`
pub async fn delete_stage_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<serde_json::Value>, AppError> {
    state.stage_service.delete(id).await?;
    Ok(Envelope::ok(json!({ "deleted": true })))
}
