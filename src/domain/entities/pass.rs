//! Pass entity: a user's booking covering one or more stages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Lifecycle state of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    Reserved,
    Active,
    Expired,
    Cancelled,
}

/// A booked trail pass.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Pass {
    pub id: i64,
    pub user_id: i64,
    pub stage_ids: Vec<i64>,
    pub starts_on: NaiveDate,
    pub days: i16,
    pub status: PassStatus,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new pass.
#[derive(Debug, Clone)]
pub struct NewPass {
    pub user_id: i64,
    pub stage_ids: Vec<i64>,
    pub starts_on: NaiveDate,
    pub days: i16,
}

impl Pass {
    /// Returns true if the pass can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status, PassStatus::Reserved | PassStatus::Active)
    }
}
