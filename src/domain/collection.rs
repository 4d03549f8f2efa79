//! Closed set of persisted record types.
//!
//! Every lookup, sort, and seeding operation is keyed by a [`Collection`]
//! variant instead of a free-form string, so an invalid collection or field
//! name is unrepresentable past the parsing boundary.

use std::fmt;

/// A named persisted record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    User,
    Pass,
    Stage,
    Badge,
    Notice,
    Policy,
    Region,
    Locale,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::User,
        Collection::Pass,
        Collection::Stage,
        Collection::Badge,
        Collection::Notice,
        Collection::Policy,
        Collection::Region,
        Collection::Locale,
    ];

    /// Database table backing this collection.
    pub fn table(self) -> &'static str {
        match self {
            Collection::User => "users",
            Collection::Pass => "passes",
            Collection::Stage => "stages",
            Collection::Badge => "badges",
            Collection::Notice => "notices",
            Collection::Policy => "policies",
            Collection::Region => "regions",
            Collection::Locale => "locales",
        }
    }

    /// Column set of the backing table, used for sort validation and for
    /// guarding dynamically assembled lookups.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Collection::User => &[
                "id",
                "nickname",
                "country_code",
                "phone_number",
                "passport_number",
                "created_at",
            ],
            Collection::Pass => &[
                "id",
                "user_id",
                "stage_ids",
                "starts_on",
                "days",
                "status",
                "created_at",
            ],
            Collection::Stage => &[
                "id",
                "region_id",
                "name",
                "distance_meters",
                "duration_minutes",
                "open_time",
                "close_time",
                "difficulty",
                "rating_one_count",
                "rating_two_count",
                "rating_three_count",
                "rating_four_count",
                "rating_five_count",
                "description",
                "created_at",
            ],
            Collection::Badge => &["id", "stage_id", "name", "image_key", "created_at"],
            Collection::Notice => &["id", "title", "content", "created_at"],
            Collection::Policy => &["id", "kind", "content", "updated_at"],
            Collection::Region => &["id", "code", "name", "created_at"],
            Collection::Locale => &["id", "code", "name"],
        }
    }

    /// Resolves a column name against this collection's schema, returning the
    /// canonical static string. Lookups and sort clauses are built only from
    /// the returned value, never from caller input.
    pub fn field(self, name: &str) -> Option<&'static str> {
        self.fields().iter().find(|f| **f == name).copied()
    }

    /// Parses a lower-case singular collection name (`"region"`, `"stage"`).
    pub fn parse(name: &str) -> Option<Collection> {
        match name {
            "user" => Some(Collection::User),
            "pass" => Some(Collection::Pass),
            "stage" => Some(Collection::Stage),
            "badge" => Some(Collection::Badge),
            "notice" => Some(Collection::Notice),
            "policy" => Some(Collection::Policy),
            "region" => Some(Collection::Region),
            "locale" => Some(Collection::Locale),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::Pass => "pass",
            Collection::Stage => "stage",
            Collection::Badge => "badge",
            Collection::Notice => "notice",
            Collection::Policy => "policy",
            Collection::Region => "region",
            Collection::Locale => "locale",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
