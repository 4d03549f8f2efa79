//! Request validation pipeline.
//!
//! DTOs combine two mechanisms:
//!
//! - `validator` derive rules for shape checks that need nothing but the
//!   field value (lengths, ranges, the `HH:MM:SS` format),
//! - a per-type [`engine::ConstraintTable`] for composite rules: existence
//!   checks against the record store, country-scoped cross-field formats,
//!   and structural rich-text length.
//!
//! Handlers run the derive rules first, then the constraint table, and fold
//! both failure shapes into the same per-field 400 body.

pub mod country;
pub mod engine;
pub mod exists;
pub mod rich_text;
pub mod time_format;

pub use engine::{ConstraintError, ConstraintTable, FieldOutcome, ValidationReport};
pub use exists::{Exists, MissingPolicy};
