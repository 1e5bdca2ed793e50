//! Contract-surface error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

/// Failure surfaced to the hosting execution environment
#[derive(Debug, Error)]
pub enum ContractError {
    /// No operation registered under the invoked name
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Malformed invocation arguments; rejected before any store access
    #[error("invalid argument for '{operation}': {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// Store-level failure, carried with its kind intact
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Response payload could not be encoded
    #[error("response encoding failed: {0}")]
    Encode(String),
}

impl ContractError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        ContractError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Stable error code for logs and host payloads
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::UnknownOperation(_) => "CLIM_UNKNOWN_OPERATION",
            ContractError::InvalidArgument { .. } => "CLIM_INVALID_ARGUMENT",
            ContractError::Store(e) => e.code(),
            ContractError::Encode(_) => "CLIM_RESPONSE_ENCODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_keep_their_code() {
        let err = ContractError::from(StoreError::NotFound("rec-1".into()));
        assert_eq!(err.code(), "CLIM_RECORD_NOT_FOUND");
        assert_eq!(format!("{}", err), "record 'rec-1' does not exist");
    }

    #[test]
    fn test_invalid_argument_names_the_operation() {
        let err = ContractError::invalid_argument("addRecord", "expected 11 arguments, got 3");
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
        assert_eq!(
            format!("{}", err),
            "invalid argument for 'addRecord': expected 11 arguments, got 3"
        );
    }
}
