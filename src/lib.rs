//! climateledger - A validating ledger core for sensor-originated climate records
//!
//! Records are validated against closed unit sets and physical bounds,
//! then stored as JSON values in an ordered key-value ledger.

pub mod cli;
pub mod contract;
pub mod ledger;
pub mod observability;
pub mod record;
pub mod store;
