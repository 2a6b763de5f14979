//! Fingerprint of the loaded model artifact.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of the raw model file bytes.
///
/// # Returns
/// Hexadecimal string representation of the hash.
pub fn model_fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
