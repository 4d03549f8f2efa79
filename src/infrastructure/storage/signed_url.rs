//! HMAC-signed, time-limited media URLs.
//!
//! The media origin trusts a URL iff its signature covers the HTTP method,
//! the object key, and the expiry timestamp. Signing and verification share
//! one secret loaded from configuration.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::MediaCommand;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies media URLs.
pub struct UrlSigner {
    secret: Vec<u8>,
    public_base: String,
}

impl UrlSigner {
    /// `public_base` is the externally reachable origin, without a trailing
    /// slash (e.g. `https://media.trailpass.example`).
    pub fn new(secret: impl Into<Vec<u8>>, public_base: impl Into<String>) -> Self {
        let mut public_base = public_base.into();
        while public_base.ends_with('/') {
            public_base.pop();
        }
        Self {
            secret: secret.into(),
            public_base,
        }
    }

    fn signature(&self, command: MediaCommand, key: &str, expires_at: i64) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(command.method().as_bytes());
        mac.update(b"\n");
        mac.update(key.as_bytes());
        mac.update(b"\n");
        mac.update(expires_at.to_string().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Builds a signed URL valid until `expires_at` (unix seconds).
    pub fn signed_url(&self, command: MediaCommand, key: &str, expires_at: i64) -> String {
        let signature = self.signature(command, key, expires_at);
        format!(
            "{}/media/{}?expires={}&signature={}",
            self.public_base, key, expires_at, signature
        )
    }

    /// Verifies a presented signature and expiry against `now` (unix
    /// seconds). Comparison is constant-time via HMAC verification.
    pub fn verify(
        &self,
        command: MediaCommand,
        key: &str,
        expires_at: i64,
        signature: &str,
        now: i64,
    ) -> bool {
        if now >= expires_at {
            return false;
        }
        let Ok(presented) = hex::decode(signature) else {
            return false;
        };

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(command.method().as_bytes());
        mac.update(b"\n");
        mac.update(key.as_bytes());
        mac.update(b"\n");
        mac.update(expires_at.to_string().as_bytes());
        mac.verify_slice(&presented).is_ok()
    }
}
