//! Stable hashing for content-addressed artifact names

use sha2::{Digest, Sha256};

pub fn stable_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)[..16].to_string()
}
