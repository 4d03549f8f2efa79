//! REST API route configuration.

use axum::Router;
use axum::routing::{get, patch, post};

use crate::api::handlers::{badges, media, notices, passes, reference, stages, users};
use crate::state::AppState;

/// Routes that require a Bearer token.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/stages",
            get(stages::list_stages_handler).post(stages::create_stage_handler),
        )
        .route(
            "/stages/{id}",
            get(stages::get_stage_handler)
                .patch(stages::update_stage_handler)
                .delete(stages::delete_stage_handler),
        )
        .route(
            "/passes",
            get(passes::list_passes_handler).post(passes::create_pass_handler),
        )
        .route("/passes/{id}", get(passes::get_pass_handler))
        .route("/passes/{id}/cancel", post(passes::cancel_pass_handler))
        .route(
            "/badges",
            get(badges::list_badges_handler).post(badges::create_badge_handler),
        )
        .route(
            "/badges/{id}",
            get(badges::get_badge_handler).delete(badges::delete_badge_handler),
        )
        .route(
            "/notices",
            get(notices::list_notices_handler).post(notices::create_notice_handler),
        )
        .route(
            "/notices/{id}",
            get(notices::get_notice_handler)
                .patch(notices::update_notice_handler)
                .delete(notices::delete_notice_handler),
        )
        .route(
            "/users/me",
            patch(users::update_profile_handler).get(users::get_profile_handler),
        )
        .route("/uploads", post(media::create_upload_handler))
}

/// Routes readable without authentication.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(reference::list_regions_handler))
        .route("/regions/{id}", get(reference::get_region_handler))
        .route("/locales", get(reference::list_locales_handler))
        .route("/policies", get(reference::list_policies_handler))
        .route("/policies/{kind}", get(reference::get_policy_handler))
}
