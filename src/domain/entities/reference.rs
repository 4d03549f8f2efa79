//! Seeded reference entities: regions, locales, and policies.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A geographic trail region (e.g. one island or mountain range).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Region {
    pub id: i64,
    /// Short stable code, e.g. `"JJU"`.
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A supported UI locale.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Locale {
    pub id: i64,
    /// BCP 47 language tag, e.g. `"ko-KR"`.
    pub code: String,
    pub name: String,
}

/// A versioned platform policy document.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Policy {
    pub id: i64,
    /// One of `terms`, `privacy`, `refund`.
    pub kind: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}
