//! Handlers for the authenticated user's profile.

use axum::{Extension, Json, extract::State};

use crate::api::dto::Envelope;
use crate::api::dto::user::{UpdateProfileRequest, UserResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the caller's profile.
///
/// # Endpoint
///
/// `GET /api/users/me`
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Envelope<UserResponse>, AppError> {
    let profile = state.user_service.get(user.id).await?;
    Ok(Envelope::ok(profile.into()))
}

/// Partially updates the caller's profile.
///
/// # Endpoint
///
/// `PATCH /api/users/me`
///
/// # Errors
///
/// Returns 400 Bad Request when the phone or passport number does not
/// match the format of the profile's country.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Envelope<UserResponse>, AppError> {
    let profile = state.user_service.update_profile(user.id, payload).await?;
    Ok(Envelope::ok(profile.into()))
}
