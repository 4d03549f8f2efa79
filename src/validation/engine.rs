//! Declarative per-field validation over DTO instances.
//!
//! Each DTO type declares a static [`ConstraintTable`] listing its field
//! rules. Rules are explicit constraint objects: plain functions for
//! synchronous checks, and named async functions for checks that consult the
//! record store. The table is declared once and evaluated per request; the
//! report is not produced until every rule, sync or async, has settled.

use crate::domain::collection::Collection;
use crate::domain::repositories::{FieldValue, RecordStore, StoreError};
use crate::error::AppError;
use futures::future::BoxFuture;
use serde_json::json;

/// Error raised inside a constraint evaluation.
///
/// Only [`ConstraintError::NotFound`] escapes the engine (as the deliberate
/// 404 signal of the not-found existence policy); every other variant marks
/// the field failed and is logged, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintError {
    #[error("referenced {collection} not found: {value}")]
    NotFound {
        collection: Collection,
        value: FieldValue,
    },
    #[error("{0}")]
    Malformed(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of one field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    pub field: &'static str,
    pub passed: bool,
    pub message: Option<String>,
}

/// Aggregated outcomes for a whole DTO, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Folds failures into the client-facing validation error.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_valid() {
            return Ok(());
        }

        let mut fields = serde_json::Map::new();
        for outcome in self.failures() {
            let message = outcome
                .message
                .clone()
                .unwrap_or_else(|| "is invalid".to_string());
            fields
                .entry(outcome.field.to_string())
                .or_insert_with(|| json!([]))
                .as_array_mut()
                .expect("entry is an array")
                .push(json!(message));
        }

        Err(AppError::bad_request(
            "Validation failed",
            json!({ "fields": fields }),
        ))
    }
}

/// A synchronous field rule.
pub type SyncRule<D> = fn(&D) -> Result<bool, ConstraintError>;

/// An asynchronous field rule receiving the injected record store.
pub type AsyncRule<D> =
    for<'a> fn(&'a D, &'a dyn RecordStore) -> BoxFuture<'a, Result<bool, ConstraintError>>;

enum Rule<D> {
    Sync(SyncRule<D>),
    Async(AsyncRule<D>),
}

struct FieldRule<D> {
    field: &'static str,
    message: &'static str,
    rule: Rule<D>,
}

/// Ordered field rules for one DTO type.
pub struct ConstraintTable<D> {
    rules: Vec<FieldRule<D>>,
}

impl<D: Sync> ConstraintTable<D> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Attaches a synchronous rule to `field`.
    pub fn rule(mut self, field: &'static str, message: &'static str, rule: SyncRule<D>) -> Self {
        self.rules.push(FieldRule {
            field,
            message,
            rule: Rule::Sync(rule),
        });
        self
    }

    /// Attaches an asynchronous rule to `field`.
    pub fn async_rule(
        mut self,
        field: &'static str,
        message: &'static str,
        rule: AsyncRule<D>,
    ) -> Self {
        self.rules.push(FieldRule {
            field,
            message,
            rule: Rule::Async(rule),
        });
        self
    }

    /// Evaluates every rule against `dto` and aggregates the outcomes.
    ///
    /// Async rules run concurrently; outcomes are reported in declaration
    /// order once all have settled. A rule returning
    /// [`ConstraintError::NotFound`] aborts with the domain not-found error;
    /// any other rule error marks its field failed.
    pub async fn validate(
        &self,
        dto: &D,
        store: &dyn RecordStore,
    ) -> Result<ValidationReport, AppError> {
        let mut results: Vec<Option<Result<bool, ConstraintError>>> =
            Vec::with_capacity(self.rules.len());
        let mut pending = Vec::new();

        for (index, entry) in self.rules.iter().enumerate() {
            match &entry.rule {
                Rule::Sync(rule) => results.push(Some(rule(dto))),
                Rule::Async(rule) => {
                    results.push(None);
                    pending.push(async move { (index, rule(dto, store).await) });
                }
            }
        }

        for (index, result) in futures::future::join_all(pending).await {
            results[index] = Some(result);
        }

        let mut outcomes = Vec::with_capacity(self.rules.len());
        for (entry, result) in self.rules.iter().zip(results) {
            let result = result.expect("every rule has settled");
            let passed = match result {
                Ok(passed) => passed,
                Err(ConstraintError::NotFound { collection, value }) => {
                    return Err(AppError::not_found(
                        format!("{collection} not found"),
                        json!({ "field": entry.field, "value": value.to_string() }),
                    ));
                }
                Err(err) => {
                    tracing::warn!(
                        field = entry.field,
                        error = %err,
                        "constraint evaluation failed; treating field as invalid"
                    );
                    false
                }
            };

            outcomes.push(FieldOutcome {
                field: entry.field,
                passed,
                message: (!passed).then(|| entry.message.to_string()),
            });
        }

        Ok(ValidationReport { outcomes })
    }
}

impl<D: Sync> Default for ConstraintTable<D> {
    fn default() -> Self {
        Self::new()
    }
}
