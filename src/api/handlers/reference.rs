//! Handlers for seeded reference data: regions, locales, and policies.

use axum::extract::{Path, State};

use crate::api::dto::Envelope;
use crate::domain::entities::{Locale, Policy, Region};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/regions`
pub async fn list_regions_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<Region>>, AppError> {
    Ok(Envelope::ok(state.reference_service.regions().await?))
}

/// `GET /api/regions/{id}`
pub async fn get_region_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<Region>, AppError> {
    Ok(Envelope::ok(state.reference_service.region(id).await?))
}

/// `GET /api/locales`
pub async fn list_locales_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<Locale>>, AppError> {
    Ok(Envelope::ok(state.reference_service.locales().await?))
}

/// `GET /api/policies`
pub async fn list_policies_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<Policy>>, AppError> {
    Ok(Envelope::ok(state.reference_service.policies().await?))
}

/// `GET /api/policies/{kind}` where kind is `terms`, `privacy`, or `refund`.
pub async fn get_policy_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Envelope<Policy>, AppError> {
    Ok(Envelope::ok(state.reference_service.policy(&kind).await?))
}
