use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const KEY_LEN: usize = 6;

/// Derive the short key for `url`: the first six lowercase hex characters of
/// the SHA-256 digest of its bytes.
///
/// Deterministic, so the same URL always maps to the same key. Distinct URLs
/// sharing a prefix collide and the later insert replaces the earlier one.
pub fn generate_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut key = format!("{digest:x}");
    key.truncate(KEY_LEN);
    key
}
