//! Command-line interface for the climate ledger
//!
//! Provides one-shot commands for:
//! - invoke: run a single contract operation against a snapshot file
//! - ops: list the registered operation names
//! - units: list the accepted units and their bounds

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{invoke, ops, run, run_command, units};
pub use errors::{CliError, CliResult};
