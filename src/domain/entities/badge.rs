//! Badge entity: a collectible awarded for completing a stage.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stage-completion badge with its artwork object key.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Badge {
    pub id: i64,
    pub stage_id: i64,
    pub name: String,
    /// Object-storage key of the badge artwork.
    pub image_key: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new badge.
#[derive(Debug, Clone)]
pub struct NewBadge {
    pub stage_id: i64,
    pub name: String,
    pub image_key: String,
}
