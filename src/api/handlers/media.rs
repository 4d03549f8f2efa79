//! Handlers for media upload grants and signed object access.
//!
//! Clients never write to storage directly: they request an upload grant,
//! PUT the bytes to the returned signed URL, and reference the object by
//! its key. Downloads go through the same signature check.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::Envelope;
use crate::api::dto::media::{CreateUploadRequest, SignedQuery, UploadGrantResponse};
use crate::error::AppError;
use crate::infrastructure::storage::MediaCommand;
use crate::state::AppState;
use crate::utils::object_key::generate_object_key;

/// Issues a signed upload URL for a new media object.
///
/// # Endpoint
///
/// `POST /api/uploads`
///
/// # Errors
///
/// Returns 400 Bad Request for an extension outside the allow-list.
pub async fn create_upload_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUploadRequest>,
) -> Result<Envelope<UploadGrantResponse>, AppError> {
    payload.validate()?;

    let key = generate_object_key("uploads", &payload.extension);
    let upload_url = state
        .media
        .signed_url(MediaCommand::Upload, &key, state.media_url_ttl);

    Ok(Envelope::created(UploadGrantResponse {
        key,
        upload_url,
        expires_in_seconds: state.media_url_ttl.as_secs(),
    }))
}

/// Serves a stored object if the presented signature is valid.
///
/// # Endpoint
///
/// `GET /media/{*key}?expires=...&signature=...`
pub async fn download_media_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SignedQuery>,
) -> Result<Response, AppError> {
    if !state
        .media
        .verify(MediaCommand::Download, &key, query.expires, &query.signature)
    {
        return Err(AppError::unauthorized(
            "Invalid or expired media URL",
            serde_json::json!({ "key": key }),
        ));
    }

    let Some(bytes) = state.media.get_object(&key).await? else {
        return Err(AppError::not_found(
            "Media object not found",
            serde_json::json!({ "key": key }),
        ));
    };

    Ok(([(header::CONTENT_TYPE, content_type_for(&key))], bytes).into_response())
}

/// Accepts an object body against a previously issued upload grant.
///
/// # Endpoint
///
/// `PUT /media/{*key}?expires=...&signature=...`
pub async fn upload_media_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SignedQuery>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    if !state
        .media
        .verify(MediaCommand::Upload, &key, query.expires, &query.signature)
    {
        return Err(AppError::unauthorized(
            "Invalid or expired media URL",
            serde_json::json!({ "key": key }),
        ));
    }

    state.media.put_object(&key, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn content_type_for(key: &str) -> &'static str {
    match key.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for("badges/a.png"), "image/png");
        assert_eq!(content_type_for("uploads/b.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
