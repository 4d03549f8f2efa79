//! Bearer token authentication middleware.
//!
//! Token signatures are verified by the gateway in front of this service;
//! here the token is only decoded to recover the authenticated user's id.
//! A token that does not parse as a three-segment JWT with a numeric `sub`
//! claim is rejected with `401 Unauthorized`.

use axum::{
    extract::{FromRequestParts, Request},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::AppError;

/// The authenticated caller, available to handlers as an `Extension`.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
}

#[derive(Deserialize)]
struct Claims {
    sub: i64,
}

fn unauthorized(reason: &str) -> AppError {
    AppError::unauthorized("Unauthorized", serde_json::json!({ "reason": reason }))
}

/// Decodes the payload segment of a gateway-verified bearer token.
fn decode_user(token: &str) -> Result<AuthUser, AppError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| unauthorized("Token is not a valid JWT"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| unauthorized("Token payload is not valid base64"))?;

    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|_| unauthorized("Token payload is not valid JSON"))?;

    Ok(AuthUser { id: claims.sub })
}

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// On success the [`AuthUser`] is inserted into request extensions for
/// downstream handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or the token cannot
/// be decoded.
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| unauthorized("Authorization header is missing or invalid"))?;

    let user = decode_user(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
