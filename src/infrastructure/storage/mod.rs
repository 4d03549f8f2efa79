//! Object storage for media, behind a signed-URL interface.

use crate::error::AppError;
use async_trait::async_trait;
use std::time::Duration;

pub mod disk_storage;
pub mod signed_url;

pub use disk_storage::DiskObjectStorage;
pub use signed_url::UrlSigner;

/// The operation a signed URL authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Download,
    Upload,
}

impl MediaCommand {
    pub fn method(self) -> &'static str {
        match self {
            MediaCommand::Download => "GET",
            MediaCommand::Upload => "PUT",
        }
    }
}

/// Media object store issuing time-limited signed URLs.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Issues a URL authorizing `command` on `key` for the next `ttl`.
    fn signed_url(&self, command: MediaCommand, key: &str, ttl: Duration) -> String;

    /// Verifies a presented signature and expiry.
    fn verify(&self, command: MediaCommand, key: &str, expires_at: i64, signature: &str) -> bool;

    async fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), AppError>;

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Deletes the given objects; missing objects are skipped silently.
    async fn delete_objects(&self, keys: &[String]) -> Result<(), AppError>;
}
