//! Domain layer: entities, the collection schema, and repository traits.

pub mod collection;
pub mod entities;
pub mod repositories;

pub use collection::Collection;
