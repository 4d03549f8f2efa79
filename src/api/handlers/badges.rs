//! Handlers for badge endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::Envelope;
use crate::api::dto::badge::{BadgeResponse, CreateBadgeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all badges.
///
/// # Endpoint
///
/// `GET /api/badges`
pub async fn list_badges_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<BadgeResponse>>, AppError> {
    let badges = state.badge_service.list().await?;
    Ok(Envelope::ok(
        badges.into_iter().map(BadgeResponse::from).collect(),
    ))
}

/// Returns a single badge.
///
/// # Endpoint
///
/// `GET /api/badges/{id}`
pub async fn get_badge_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<BadgeResponse>, AppError> {
    let badge = state.badge_service.get(id).await?;
    Ok(Envelope::ok(badge.into()))
}

/// Creates a badge.
///
/// # Endpoint
///
/// `POST /api/badges`
///
/// # Errors
///
/// Returns 404 Not Found when `stage_id` references no stage; the badge
/// form is only reachable from an existing stage, so a missing stage means
/// the resource is gone, not that the input is wrong.
pub async fn create_badge_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateBadgeRequest>,
) -> Result<Envelope<BadgeResponse>, AppError> {
    let badge = state.badge_service.create(payload).await?;
    Ok(Envelope::created(badge.into()))
}

/// Deletes a badge along with its stored artwork.
///
/// # Endpoint
///
/// `DELETE /api/badges/{id}`
pub async fn delete_badge_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<serde_json::Value>, AppError> {
    state.badge_service.delete(id).await?;
    Ok(Envelope::ok(json!({ "deleted": true })))
}
