//! Ledger state abstraction
//!
//! The record store treats its backing store as an opaque ordered byte
//! map supplied by the hosting platform. Durability, consensus, and
//! transaction isolation are the host's concern; this crate only reads
//! and writes through the seam.
//!
//! Two reference backends ship with the crate: `MemoryLedger` for tests
//! and embedding, `FileLedger` for the CLI harness.

mod file;
mod memory;

pub use file::FileLedger;
pub use memory::MemoryLedger;

use std::collections::BTreeMap;
use std::ops::Bound;

use thiserror::Error;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure inside the backing store, passed through to callers unchanged
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("ledger state corrupt: {0}")]
    Corrupt(String),

    #[error("ledger backend failure: {0}")]
    Backend(String),
}

impl LedgerError {
    /// Stable error code for logs and host payloads
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Io(_) => "CLIM_LEDGER_IO",
            LedgerError::Corrupt(_) => "CLIM_LEDGER_CORRUPT",
            LedgerError::Backend(_) => "CLIM_LEDGER_BACKEND",
        }
    }
}

/// Ordered key-value state as exposed by the hosting ledger platform
///
/// Keys are UTF-8 strings ordered lexicographically by byte value.
/// Values are opaque bytes. All operations are blocking and complete
/// before returning.
pub trait LedgerState {
    /// Fetches the value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any existing value
    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// All pairs with `start <= key < end`, in ascending key order.
    ///
    /// An empty `start` scans from the smallest key; an empty `end`
    /// scans to the largest. An inverted interval yields no pairs.
    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>>;
}

/// Shared scan logic for the map-backed reference backends
fn scan_map(entries: &BTreeMap<String, Vec<u8>>, start: &str, end: &str) -> Vec<(String, Vec<u8>)> {
    // BTreeMap::range panics on inverted intervals; they scan empty here
    if !start.is_empty() && !end.is_empty() && start >= end {
        return Vec::new();
    }

    let lower: Bound<&str> = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let upper: Bound<&str> = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };

    entries
        .range::<str, _>((lower, upper))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
