//! Object-storage key generation for uploaded media.

use base64::Engine as _;
use rand::RngCore;

/// Generates a random, URL-safe object key under the given prefix,
/// e.g. `badges/4fT9xQ2mPz1w.png`.
pub fn generate_object_key(prefix: &str, extension: &str) -> String {
    let mut buf = [0u8; 9];
    rand::rng().fill_bytes(&mut buf);
    let stem = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf);
    format!("{prefix}/{stem}.{extension}")
}
