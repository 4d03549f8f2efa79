//! User entity: the profile this service maintains for a hiker.
//!
//! Authentication is owned upstream; this entity only carries profile data
//! the platform itself needs (contact and travel-document details validated
//! against the user's country).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A hiker's profile.
///
/// `phone_number` is stored in national format without a dialing prefix; the
/// prefix is derived from `country_code` when the number is validated.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub nickname: String,
    /// ISO 3166-1 alpha-2 code, e.g. `"KR"`.
    pub country_code: String,
    pub phone_number: Option<String>,
    pub passport_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub nickname: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub passport_number: Option<String>,
}
