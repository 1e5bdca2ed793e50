//! Record identity derivation
//!
//! Exactly one policy is active per store. The default derives the key
//! from report content, so a device re-reporting the same timestamp maps
//! to the same key and collides as a duplicate instead of silently
//! overwriting earlier state.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// How `create` assigns the key for a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// SHA-256 over deviceId and timestamp. Deterministic; requires a
    /// timestamp; a draft-supplied id is rejected.
    #[default]
    ContentHash,
    /// The draft must carry a non-empty id
    CallerSupplied,
    /// Fresh UUID v4 per record; a draft-supplied id is rejected
    Random,
}

impl IdentityPolicy {
    /// Returns the configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityPolicy::ContentHash => "content-hash",
            IdentityPolicy::CallerSupplied => "caller-supplied",
            IdentityPolicy::Random => "random",
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdentityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content-hash" => Ok(IdentityPolicy::ContentHash),
            "caller-supplied" => Ok(IdentityPolicy::CallerSupplied),
            "random" => Ok(IdentityPolicy::Random),
            other => Err(format!("unknown identity policy '{other}'")),
        }
    }
}

/// Derives the content-hash identity for a device/timestamp pair.
/// URL-safe without padding, so the id is clean in keys, paths, and logs.
/// A zero byte separates the two fields in the digest input, so shifting
/// characters across the field boundary changes the id.
pub fn content_hash_id(device_id: &str, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(device_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(timestamp.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Generates a random record identity
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}
