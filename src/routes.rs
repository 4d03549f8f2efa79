//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `/api/*`            - REST API; reads public, writes Bearer-protected
//! - `/media/*`          - Signed-URL object access
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token on protected API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health, media};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn(auth::layer))
        .layer(rate_limit::secure_layer());

    let public = api::routes::public_routes().layer(rate_limit::layer());

    let api_router = Router::new().merge(protected).merge(public);

    let media_router = Router::new()
        .route(
            "/{*key}",
            get(media::download_media_handler).put(media::upload_media_handler),
        )
        .layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", api_router)
        .nest("/media", media_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
