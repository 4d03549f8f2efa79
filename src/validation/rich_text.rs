//! Structural content-length checks for serialized rich text.
//!
//! Rich-text payloads are stored as a JSON array of content blocks. Each
//! block may carry a `text` payload; other block kinds (images, dividers)
//! have none and contribute zero length. A payload that does not parse as a
//! block sequence fails closed: the field is invalid, never a panic and
//! never a silent pass.

use serde::Deserialize;

use super::engine::ConstraintError;

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(default)]
    text: Option<String>,
}

/// Sums the character length of every block's text payload.
pub fn rich_text_length(serialized: &str) -> Result<usize, ConstraintError> {
    let blocks: Vec<Block> = serde_json::from_str(serialized)
        .map_err(|e| ConstraintError::Malformed(format!("rich text does not parse: {e}")))?;

    Ok(blocks
        .iter()
        .filter_map(|b| b.text.as_deref())
        .map(|t| t.chars().count())
        .sum())
}

/// Passes iff the summed text length does not exceed `max_characters`.
pub fn rich_text_within(serialized: &str, max_characters: usize) -> Result<bool, ConstraintError> {
    Ok(rich_text_length(serialized)? <= max_characters)
}
