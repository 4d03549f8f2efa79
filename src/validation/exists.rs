//! Existence constraint: does a referenced record actually exist?
//!
//! Checks a scalar value or every element of a list against a unique-field
//! lookup in a named collection. Store failures are caught and reported as
//! a failed check; whether a missing record is a soft validation failure or
//! a hard 404 is chosen per declaration via [`MissingPolicy`].

use crate::domain::collection::Collection;
use crate::domain::repositories::{FieldValue, RecordStore};

use super::engine::ConstraintError;

/// What a failed existence check means to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Fold into the DTO's validation failure (400 with per-field messages).
    Invalid,
    /// Raise the domain not-found signal directly (404).
    NotFound,
}

/// A declarative existence check against one collection.
#[derive(Debug, Clone)]
pub struct Exists {
    collection: Collection,
    unique_field: &'static str,
    on_missing: MissingPolicy,
}

impl Exists {
    /// Existence check by `id` with the soft [`MissingPolicy::Invalid`].
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            unique_field: "id",
            on_missing: MissingPolicy::Invalid,
        }
    }

    /// Looks up by a different unique field.
    pub fn by(mut self, unique_field: &'static str) -> Self {
        self.unique_field = unique_field;
        self
    }

    /// Switches a missing record from a validation failure to a hard 404.
    pub fn or_not_found(mut self) -> Self {
        self.on_missing = MissingPolicy::NotFound;
        self
    }

    /// Checks a scalar value. An absent value fails without any lookup.
    pub async fn check(
        &self,
        store: &dyn RecordStore,
        value: Option<&FieldValue>,
    ) -> Result<bool, ConstraintError> {
        let Some(value) = value else {
            return self.resolve(false, &FieldValue::str("<absent>"));
        };

        let found = self.lookup(store, value).await;
        self.resolve(found, value)
    }

    /// Checks every element of a list, running the lookups concurrently.
    /// Passes iff every element resolves to an existing record. An empty
    /// list passes vacuously.
    pub async fn check_all(
        &self,
        store: &dyn RecordStore,
        values: &[FieldValue],
    ) -> Result<bool, ConstraintError> {
        let lookups = values.iter().map(|v| self.lookup(store, v));
        let found = futures::future::join_all(lookups).await;

        match found.iter().position(|f| !f) {
            None => Ok(true),
            Some(i) => self.resolve(false, &values[i]),
        }
    }

    /// Single lookup; store errors are logged and count as "not found"
    /// rather than propagating.
    async fn lookup(&self, store: &dyn RecordStore, value: &FieldValue) -> bool {
        match store
            .find_unique(self.collection, self.unique_field, value)
            .await
        {
            Ok(record) => record.is_some(),
            Err(err) => {
                tracing::warn!(
                    collection = %self.collection,
                    field = self.unique_field,
                    error = %err,
                    "existence lookup failed; treating as missing"
                );
                false
            }
        }
    }

    fn resolve(&self, found: bool, value: &FieldValue) -> Result<bool, ConstraintError> {
        if found {
            return Ok(true);
        }
        match self.on_missing {
            MissingPolicy::Invalid => Ok(false),
            MissingPolicy::NotFound => Err(ConstraintError::NotFound {
                collection: self.collection,
                value: value.clone(),
            }),
        }
    }
}
