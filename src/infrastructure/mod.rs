//! Infrastructure layer: database access and object storage.

pub mod persistence;
pub mod storage;
