//! Media upload DTOs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// File extensions the platform accepts for uploaded artwork.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

fn validate_extension(extension: &str) -> Result<(), ValidationError> {
    if ALLOWED_EXTENSIONS.contains(&extension) {
        Ok(())
    } else {
        Err(ValidationError::new("extension")
            .with_message("extension must be one of png, jpg, jpeg, webp".into()))
    }
}

/// Request for a signed upload URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUploadRequest {
    /// Lowercase file extension without the dot.
    #[validate(custom(function = validate_extension))]
    pub extension: String,
}

/// A signed upload grant: PUT the bytes to `upload_url`, then reference
/// the object by `key`.
#[derive(Debug, Serialize)]
pub struct UploadGrantResponse {
    pub key: String,
    pub upload_url: String,
    pub expires_in_seconds: u64,
}

/// Signature query parameters carried by signed media URLs.
#[derive(Debug, Deserialize)]
pub struct SignedQuery {
    pub expires: i64,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extension_accepted() {
        let request = CreateUploadRequest {
            extension: "png".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let request = CreateUploadRequest {
            extension: "exe".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_uppercase_extension_rejected() {
        let request = CreateUploadRequest {
            extension: "PNG".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
