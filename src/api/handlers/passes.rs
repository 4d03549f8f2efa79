//! Handlers for pass booking endpoints. All operate on the authenticated
//! user's own passes.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use crate::api::dto::Envelope;
use crate::api::dto::pass::{CreatePassRequest, PassResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's passes.
///
/// # Endpoint
///
/// `GET /api/passes`
pub async fn list_passes_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Envelope<Vec<PassResponse>>, AppError> {
    let passes = state.pass_service.list_for_user(user.id).await?;
    Ok(Envelope::ok(
        passes.into_iter().map(PassResponse::from).collect(),
    ))
}

/// Returns one of the caller's passes.
///
/// # Endpoint
///
/// `GET /api/passes/{id}`
pub async fn get_pass_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Envelope<PassResponse>, AppError> {
    let pass = state.pass_service.get_for_user(id, user.id).await?;
    Ok(Envelope::ok(pass.into()))
}

/// Books a pass for the caller.
///
/// # Endpoint
///
/// `POST /api/passes`
///
/// # Errors
///
/// Returns 400 Bad Request if the stage list is empty, the day count is
/// out of range, or any referenced stage does not exist.
pub async fn create_pass_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreatePassRequest>,
) -> Result<Envelope<PassResponse>, AppError> {
    let pass = state.pass_service.create(user.id, payload).await?;
    Ok(Envelope::created(pass.into()))
}

/// Cancels one of the caller's passes.
///
/// # Endpoint
///
/// `POST /api/passes/{id}/cancel`
///
/// # Errors
///
/// Returns 409 Conflict if the pass has already expired or been cancelled.
pub async fn cancel_pass_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Envelope<PassResponse>, AppError> {
    let pass = state.pass_service.cancel(id, user.id).await?;
    Ok(Envelope::ok(pass.into()))
}
