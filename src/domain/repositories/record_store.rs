//! Generic record store: the persistence collaborator behind existence
//! checks, seeding, and health probes.
//!
//! Typed per-resource repositories cover the CRUD paths; the record store
//! covers the generic "does this referenced record exist" path that the
//! validation pipeline needs across every collection.

use crate::domain::collection::Collection;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// A value used in a unique-field lookup or as an upsert key.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Str(String),
}

impl FieldValue {
    pub fn str(s: impl Into<String>) -> Self {
        FieldValue::Str(s.into())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

/// Errors surfaced by the record store.
///
/// Constraint evaluation catches these and folds them into a failed field;
/// they never escape as a 500 out of the validation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("collection {collection} has no field {field}")]
    UnknownField {
        collection: Collection,
        field: String,
    },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Collection-keyed access to persisted records.
///
/// Field names are resolved against [`Collection::fields`] before any query
/// is assembled, so a malformed field name is an [`StoreError::UnknownField`]
/// rather than a database error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up a single record by a unique field.
    ///
    /// Returns the record as a JSON object, or `None` when no record matches.
    async fn find_unique(
        &self,
        collection: Collection,
        field: &str,
        value: &FieldValue,
    ) -> Result<Option<Value>, StoreError>;

    /// Inserts or replaces a record keyed by `id`.
    ///
    /// `data` must be a JSON object whose keys are a subset of the
    /// collection's field set.
    async fn upsert(&self, collection: Collection, data: Value) -> Result<(), StoreError>;

    /// Deletes all records with the given ids. Returns the number removed.
    async fn delete_many(&self, collection: Collection, ids: &[i64]) -> Result<u64, StoreError>;

    /// Connectivity probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
