//! PostgreSQL implementation of the generic record store.
//!
//! Queries are assembled from [`Collection`] metadata only: table and column
//! names come from the enum's static sets, never from caller input, so the
//! dynamic SQL here cannot be steered by a request.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::collection::Collection;
use crate::domain::repositories::{FieldValue, RecordStore, StoreError};

/// Collection-keyed PostgreSQL store.
pub struct PgRecordStore {
    pool: Arc<PgPool>,
}

impl PgRecordStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn resolve_field(
        collection: Collection,
        field: &str,
    ) -> Result<&'static str, StoreError> {
        collection
            .field(field)
            .ok_or_else(|| StoreError::UnknownField {
                collection,
                field: field.to_string(),
            })
    }

    /// Builds the upsert statement for a payload.
    ///
    /// Only the columns present in the payload are named in the INSERT list,
    /// so omitted columns take their table defaults instead of an explicit
    /// NULL from `jsonb_populate_record`.
    fn upsert_sql(collection: Collection, data: &Value) -> Result<String, StoreError> {
        let Some(object) = data.as_object() else {
            return Err(StoreError::UnknownField {
                collection,
                field: "<non-object payload>".to_string(),
            });
        };

        let mut columns = Vec::with_capacity(object.len());
        for key in object.keys() {
            columns.push(Self::resolve_field(collection, key)?);
        }
        columns.sort_unstable();

        if columns.is_empty() {
            return Err(StoreError::UnknownField {
                collection,
                field: "<empty payload>".to_string(),
            });
        }

        let assignments: Vec<String> = columns
            .iter()
            .filter(|c| **c != "id")
            .map(|c| format!("{c} = EXCLUDED.{c}"))
            .collect();
        let conflict = if assignments.is_empty() {
            "DO NOTHING".to_string()
        } else {
            format!("DO UPDATE SET {}", assignments.join(", "))
        };

        let table = collection.table();
        let column_list = columns.join(", ");
        Ok(format!(
            "INSERT INTO {table} ({column_list}) \
             SELECT {column_list} FROM jsonb_populate_record(NULL::{table}, $1) \
             ON CONFLICT (id) {conflict}"
        ))
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_unique(
        &self,
        collection: Collection,
        field: &str,
        value: &FieldValue,
    ) -> Result<Option<Value>, StoreError> {
        let field = Self::resolve_field(collection, field)?;
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.{} = $1 LIMIT 1",
            collection.table(),
            field
        );

        let query = sqlx::query_scalar::<_, Value>(&sql);
        let record = match value {
            FieldValue::Int(i) => query.bind(*i),
            FieldValue::Str(s) => query.bind(s.clone()),
        }
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn upsert(&self, collection: Collection, data: Value) -> Result<(), StoreError> {
        let sql = Self::upsert_sql(collection, &data)?;
        sqlx::query(&sql)
            .bind(data)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_many(
        &self,
        collection: Collection,
        ids: &[i64],
    ) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ANY($1)", collection.table());
        let result = sqlx::query(&sql)
            .bind(ids.to_vec())
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
