//! Record store error types
//!
//! Every failure mode is a distinct variant so hosts can branch without
//! string matching. `code()` gives the stable wire identifier.

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::record::ValidationError;

use super::identity::IdentityPolicy;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A failure of a record store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Candidate record failed unit or range validation; nothing written
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No record stored under the key
    #[error("record '{0}' does not exist")]
    NotFound(String),

    /// `create` collided with an existing key
    #[error("record '{0}' already exists")]
    Duplicate(String),

    /// The draft is unusable under the active identity policy
    #[error("identity policy '{policy}': {reason}")]
    Identity {
        policy: IdentityPolicy,
        reason: String,
    },

    /// An update tried to change the stored key
    #[error("record id is immutable: stored '{stored}', draft carries '{supplied}'")]
    ImmutableId { stored: String, supplied: String },

    /// Stored bytes under the key failed to parse as a record
    #[error("record '{key}' is unreadable: {reason}")]
    Unreadable { key: String, reason: String },

    /// Record could not be encoded for storage
    #[error("record '{key}' could not be encoded: {reason}")]
    Encode { key: String, reason: String },

    /// Backing store failure, passed through
    #[error(transparent)]
    Storage(#[from] LedgerError),
}

impl StoreError {
    /// Stable error code for logs and host payloads
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(e) => e.code(),
            StoreError::NotFound(_) => "CLIM_RECORD_NOT_FOUND",
            StoreError::Duplicate(_) => "CLIM_DUPLICATE_RECORD",
            StoreError::Identity { .. } => "CLIM_IDENTITY_POLICY",
            StoreError::ImmutableId { .. } => "CLIM_IMMUTABLE_RECORD_ID",
            StoreError::Unreadable { .. } => "CLIM_RECORD_UNREADABLE",
            StoreError::Encode { .. } => "CLIM_RECORD_ENCODE",
            StoreError::Storage(e) => e.code(),
        }
    }
}
