//! Request/response DTOs and their converters.
//!
//! Every inbound DTO derives `Validate` for per-field format checks; the
//! composite constraint tables next to each DTO cover everything the
//! derive cannot express (existence lookups, cross-field pairings,
//! structural content length).

pub mod badge;
pub mod envelope;
pub mod media;
pub mod notice;
pub mod pagination;
pub mod pass;
pub mod stage;
pub mod user;

pub use envelope::Envelope;
pub use pagination::PaginationParams;
