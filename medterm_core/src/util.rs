//! Content hashing for cache keys.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest identifying `payload` within `namespace`.
///
/// The namespace is length-prefixed, so no choice of namespace and payload
/// can produce the byte stream of another pair. Identical payloads from
/// different callers (an annotation request and a schema request over the
/// same text) therefore never share a key.
#[must_use]
pub fn content_hash(namespace: &str, payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((namespace.len() as u64).to_le_bytes());
    hasher.update(namespace.as_bytes());
    hasher.update(payload.as_bytes());
    format!("{:x}", hasher.finalize())
}
