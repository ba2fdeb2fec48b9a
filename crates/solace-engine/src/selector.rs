//! Deterministic reply selection
//!
//! The same message must pick the same variant in every process and on
//! every release, so hashing goes through SHA-256 instead of the standard
//! library's hashers (`RandomState` re-seeds per process, and the default
//! hasher's output is not a stability guarantee).

use sha2::{Digest, Sha256};

/// Stable 64-bit hash of the text: the first 8 bytes of its SHA-256
/// digest, read big-endian.
pub fn stable_hash(text: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Pick the variant for this text. Returns `None` only when `variants`
/// is empty.
pub fn select<'a>(text: &str, variants: &'a [String]) -> Option<&'a str> {
    if variants.is_empty() {
        return None;
    }

    let idx = (stable_hash(text) % variants.len() as u64) as usize;
    Some(variants[idx].as_str())
}
