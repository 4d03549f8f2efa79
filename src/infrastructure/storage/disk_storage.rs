//! Disk-backed object storage with signed-URL access control.
//!
//! Media objects live under a configured root directory and are reachable
//! only through the `/media/{key}` routes, which verify the HMAC signature
//! issued by [`UrlSigner`] before touching the filesystem.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

use super::signed_url::UrlSigner;
use super::{MediaCommand, ObjectStorage};

pub struct DiskObjectStorage {
    root: PathBuf,
    signer: UrlSigner,
}

impl DiskObjectStorage {
    pub fn new(root: impl Into<PathBuf>, signer: UrlSigner) -> Self {
        Self {
            root: root.into(),
            signer,
        }
    }

    /// Rejects keys that would escape the media root.
    fn object_path(&self, key: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(key);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if key.is_empty() || !safe {
            return Err(AppError::bad_request(
                "Invalid object key",
                json!({ "key": key }),
            ));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for DiskObjectStorage {
    fn signed_url(&self, command: MediaCommand, key: &str, ttl: Duration) -> String {
        let expires_at = Utc::now().timestamp() + ttl.as_secs() as i64;
        self.signer.signed_url(command, key, expires_at)
    }

    fn verify(&self, command: MediaCommand, key: &str, expires_at: i64, signature: &str) -> bool {
        self.signer
            .verify(command, key, expires_at, signature, Utc::now().timestamp())
    }

    async fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), AppError> {
        let path = self.object_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!(error = %e, key, "failed to create media directory");
                AppError::internal("Object storage error", json!({}))
            })?;
        }
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!(error = %e, key, "failed to write media object");
            AppError::internal("Object storage error", json!({}))
        })
    }

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.object_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!(error = %e, key, "failed to read media object");
                Err(AppError::internal("Object storage error", json!({})))
            }
        }
    }

    async fn delete_objects(&self, keys: &[String]) -> Result<(), AppError> {
        for key in keys {
            let path = self.object_path(key)?;
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                // Deleting an already-absent object is not an error.
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::error!(error = %e, key, "failed to delete media object");
                    return Err(AppError::internal("Object storage error", json!({})));
                }
            }
        }
        Ok(())
    }
}
