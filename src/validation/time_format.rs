//! Strict 24-hour `HH:MM:SS` format validation.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static TIME_OF_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").unwrap());

/// Returns true iff `value` is a zero-padded 24-hour `HH:MM:SS` string.
///
/// No timezone suffix, no leap seconds.
pub fn is_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_RE.is_match(value)
}

/// `validator`-compatible wrapper for `#[validate(custom(...))]` fields.
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    if is_time_of_day(value) {
        Ok(())
    } else {
        Err(ValidationError::new("time_of_day")
            .with_message("must be a 24-hour HH:MM:SS string".into()))
    }
}
