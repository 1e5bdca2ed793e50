//! CLI command implementations
//!
//! The CLI is a thin host around the contract: it opens a file-backed
//! ledger, invokes one operation, prints the payload, and exits. All
//! semantics live in the contract and store layers.

use std::path::Path;

use crate::contract::ClimateContract;
use crate::ledger::FileLedger;
use crate::record::{EmissionUnit, PollutionUnit, RangeTable, TemperatureUnit};
use crate::store::IdentityPolicy;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Invoke {
            ledger,
            policy,
            operation,
            args,
        } => invoke(&ledger, &policy, &operation, &args),
        Command::Ops => ops(),
        Command::Units => units(),
    }
}

/// Invoke one contract operation against the snapshot at `ledger_path`
pub fn invoke(
    ledger_path: &Path,
    policy: &str,
    operation: &str,
    args: &[String],
) -> CliResult<()> {
    let policy: IdentityPolicy = policy.parse().map_err(CliError::Usage)?;

    let mut ledger = FileLedger::open(ledger_path)?;
    let contract = ClimateContract::with_policy(policy);
    let payload = contract.invoke(&mut ledger, operation, args)?;

    if !payload.is_empty() {
        println!("{}", String::from_utf8_lossy(&payload));
    }

    Ok(())
}

/// Print the registered operation names
pub fn ops() -> CliResult<()> {
    for name in ClimateContract::new().operations() {
        println!("{name}");
    }
    Ok(())
}

/// Print every unit with its inclusive physical bounds
pub fn units() -> CliResult<()> {
    let table = RangeTable::new();

    println!("emissions:");
    for unit in EmissionUnit::ALL {
        let bound = table.emission(unit);
        println!("  {:<7} [{}, {}]", unit.as_str(), bound.min, bound.max);
    }

    println!("temperature:");
    for unit in TemperatureUnit::ALL {
        let bound = table.temperature(unit);
        println!("  {:<7} [{}, {}]", unit.as_str(), bound.min, bound.max);
    }

    println!("pollution:");
    for unit in PollutionUnit::ALL {
        let bound = table.pollution(unit);
        println!("  {:<7} [{}, {}]", unit.as_str(), bound.min, bound.max);
    }

    Ok(())
}
