//! CLI argument definitions using clap
//!
//! Commands:
//! - climateledger invoke <operation> [args...] --ledger <path>
//! - climateledger ops
//! - climateledger units

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// climateledger - a validating ledger core for climate sensor records
#[derive(Parser, Debug)]
#[command(name = "climateledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Invoke a contract operation against a file-backed ledger
    Invoke {
        /// Path to the ledger snapshot file
        #[arg(long, default_value = "./ledger.json")]
        ledger: PathBuf,

        /// Identity policy: content-hash, caller-supplied or random
        #[arg(long, default_value = "content-hash")]
        policy: String,

        /// Operation name as registered on the contract
        operation: String,

        /// Positional operation arguments, in wire order.
        /// Hyphens allowed so negative readings pass through.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the operations the contract registers
    Ops,

    /// Print the unit vocabulary with its physical bounds
    Units,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
