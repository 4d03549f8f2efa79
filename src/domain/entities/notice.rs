//! Notice entity: an announcement shown to platform users.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A published announcement. `content` is a serialized rich-text block
/// sequence, capped at creation time by the content-length constraint.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new notice.
#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
}

/// Partial update for an existing notice. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct NoticePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
