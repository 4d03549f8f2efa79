//! Pure unit conversions between wire and persistence representations.
//!
//! Durations travel over the wire as `{hours, minutes}` and are stored as a
//! flat minute count. Times of day travel as strict `HH:MM:SS` strings and
//! are stored as timestamps anchored to a fixed reference date, so only the
//! time-of-day component carries meaning.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Reference date that anchors stored time-of-day values.
const ANCHOR_YMD: (i32, u32, u32) = (1970, 1, 1);

/// Wire representation of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: u32,
    /// Always in `0..=59` when produced by [`minutes_to_hours_and_minutes`].
    pub minutes: u32,
}

/// Splits a flat minute count into hours and leftover minutes.
pub fn minutes_to_hours_and_minutes(total_minutes: u32) -> HoursMinutes {
    HoursMinutes {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
    }
}

/// Collapses an hours/minutes pair into a flat minute count.
pub fn hours_and_minutes_to_minutes(value: HoursMinutes) -> u32 {
    value.hours * 60 + value.minutes
}

#[derive(Debug, thiserror::Error)]
#[error("invalid time-of-day string: {0:?}")]
pub struct InvalidTimeOfDay(pub String);

/// Parses a strict `HH:MM:SS` string into a timestamp on the anchor date.
///
/// The format validator ([`crate::validation::time_format`]) is expected to
/// run first; a non-matching string still fails here with
/// [`InvalidTimeOfDay`] rather than producing a bogus timestamp.
pub fn time_of_day_to_timestamp(value: &str) -> Result<DateTime<Utc>, InvalidTimeOfDay> {
    if !crate::validation::time_format::is_time_of_day(value) {
        return Err(InvalidTimeOfDay(value.to_string()));
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| InvalidTimeOfDay(value.to_string()))?;

    let (y, m, d) = ANCHOR_YMD;
    let date = NaiveDate::from_ymd_opt(y, m, d).expect("anchor date is valid");
    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Formats the time-of-day component of a stored timestamp as `HH:MM:SS`.
pub fn timestamp_to_time_of_day(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}
