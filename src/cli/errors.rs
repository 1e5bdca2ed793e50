//! CLI-specific error types

use thiserror::Error;

use crate::contract::ContractError;
use crate::ledger::LedgerError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// A failure of a CLI command
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command-line input that clap cannot catch
    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CliError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Usage(_) => "CLIM_CLI_USAGE",
            CliError::Contract(e) => e.code(),
            CliError::Ledger(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_codes_pass_through() {
        let err = CliError::from(ContractError::UnknownOperation("nope".into()));
        assert_eq!(err.code(), "CLIM_UNKNOWN_OPERATION");

        let err = CliError::Usage("unknown identity policy 'md5'".into());
        assert_eq!(err.code(), "CLIM_CLI_USAGE");
        assert!(format!("{err}").contains("md5"));
    }
}
