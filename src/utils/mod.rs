//! Shared helpers

mod hashing;

pub use hashing::stable_digest;
