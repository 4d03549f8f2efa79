//! Sort query-parameter parsing.
//!
//! Grammar: `[-]field` or `[-]relation,field`. A leading `-` means
//! descending. Unrecognized fields are silently dropped (fail-open): list
//! endpoints fall back to no explicit ordering instead of rejecting the
//! request.

use crate::domain::collection::Collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A resolved ordering instruction.
///
/// Field names are the canonical `&'static str` entries from
/// [`Collection::fields`], so directives can be spliced into SQL safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirective {
    /// No ordering applied. Not an error.
    Unsorted,
    Field {
        field: &'static str,
        order: SortOrder,
    },
    /// Order by a field of a related collection, e.g. `region,name` on the
    /// stage listing.
    Relation {
        relation: Collection,
        field: &'static str,
        order: SortOrder,
    },
}

/// Parses a sort specification against a collection's schema.
///
/// - Empty spec: defaults to `created_at` descending when the collection
///   has that field, otherwise [`SortDirective::Unsorted`].
/// - `relation,field`: the relation name (lower-cased) must parse as a
///   collection different from `collection`, and `field` must be in that
///   collection's schema.
/// - Plain `field`: must be in `collection`'s schema.
/// - Anything else: [`SortDirective::Unsorted`].
pub fn parse_sort(spec: Option<&str>, collection: Collection) -> SortDirective {
    let spec = spec.unwrap_or("").trim();

    if spec.is_empty() {
        return match collection.field("created_at") {
            Some(field) => SortDirective::Field {
                field,
                order: SortOrder::Desc,
            },
            None => SortDirective::Unsorted,
        };
    }

    let (spec, order) = match spec.strip_prefix('-') {
        Some(rest) => (rest, SortOrder::Desc),
        None => (spec, SortOrder::Asc),
    };

    if let Some((relation_name, nested)) = spec.split_once(',') {
        let relation_name = relation_name.to_lowercase();
        if let Some(relation) = Collection::parse(&relation_name)
            && relation != collection
            && let Some(field) = relation.field(nested)
        {
            return SortDirective::Relation {
                relation,
                field,
                order,
            };
        }
        return SortDirective::Unsorted;
    }

    match collection.field(spec) {
        Some(field) => SortDirective::Field { field, order },
        None => SortDirective::Unsorted,
    }
}
