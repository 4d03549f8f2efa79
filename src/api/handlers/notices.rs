//! Handlers for notice endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::notice::{CreateNoticeRequest, NoticeResponse, UpdateNoticeRequest};
use crate::api::dto::{Envelope, PaginationParams};
use crate::domain::Collection;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_sort::parse_sort;

#[derive(Debug, Deserialize)]
pub struct ListNoticesQuery {
    pub sort: Option<String>,
}

/// Lists notices with pagination and ordering.
///
/// # Endpoint
///
/// `GET /api/notices?page=1&page_size=25&sort=-created_at`
pub async fn list_notices_handler(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<ListNoticesQuery>,
) -> Result<Envelope<Vec<NoticeResponse>>, AppError> {
    let (offset, limit) = pagination
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request("Invalid pagination", json!({ "reason": msg })))?;

    let sort = parse_sort(query.sort.as_deref(), Collection::Notice);
    let notices = state.notice_service.list(offset, limit, &sort).await?;

    Ok(Envelope::ok(
        notices.into_iter().map(NoticeResponse::from).collect(),
    ))
}

/// Returns a single notice.
///
/// # Endpoint
///
/// `GET /api/notices/{id}`
pub async fn get_notice_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<NoticeResponse>, AppError> {
    let notice = state.notice_service.get(id).await?;
    Ok(Envelope::ok(notice.into()))
}

/// Publishes a notice.
///
/// # Endpoint
///
/// `POST /api/notices`
///
/// # Errors
///
/// Returns 400 Bad Request when the title is out of range or the content
/// is malformed or exceeds its length cap.
pub async fn create_notice_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoticeRequest>,
) -> Result<Envelope<NoticeResponse>, AppError> {
    let notice = state.notice_service.create(payload).await?;
    Ok(Envelope::created(notice.into()))
}

/// Partially updates a notice.
///
/// # Endpoint
///
/// `PATCH /api/notices/{id}`
pub async fn update_notice_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNoticeRequest>,
) -> Result<Envelope<NoticeResponse>, AppError> {
    let notice = state.notice_service.update(id, payload).await?;
    Ok(Envelope::ok(notice.into()))
}

/// Deletes a notice.
///
/// # Endpoint
///
/// `DELETE /api/notices/{id}`
pub async fn delete_notice_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<serde_json::Value>, AppError> {
    state.notice_service.delete(id).await?;
    Ok(Envelope::ok(json!({ "deleted": true })))
}
