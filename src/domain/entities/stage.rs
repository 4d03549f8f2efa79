//! Stage entity: one walkable section of a trail.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A trail stage with schedule, difficulty, and rating counters.
///
/// `open_time` / `close_time` hold the daily opening hours as timestamps
/// anchored to a fixed reference date; only the time-of-day component is
/// meaningful. Conversion to and from the `HH:MM:SS` wire form lives in
/// [`crate::utils::unit_converters`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Stage {
    pub id: i64,
    pub region_id: i64,
    pub name: String,
    pub distance_meters: i32,
    pub duration_minutes: i32,
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    /// 1 (easy) to 5 (hard).
    pub difficulty: i16,
    pub rating_one_count: i32,
    pub rating_two_count: i32,
    pub rating_three_count: i32,
    pub rating_four_count: i32,
    pub rating_five_count: i32,
    /// Serialized rich-text block sequence.
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new stage.
#[derive(Debug, Clone)]
pub struct NewStage {
    pub region_id: i64,
    pub name: String,
    pub distance_meters: i32,
    pub duration_minutes: i32,
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    pub difficulty: i16,
    pub description: String,
}

/// Partial update for an existing stage. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct StagePatch {
    pub name: Option<String>,
    pub distance_meters: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub open_time: Option<DateTime<Utc>>,
    pub close_time: Option<DateTime<Utc>>,
    pub difficulty: Option<i16>,
    pub description: Option<String>,
}
