//! Hashing helpers

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data` as lowercase hex
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}
