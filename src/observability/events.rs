//! Observable events
//!
//! Every loggable moment has an explicit, typed name. Event strings are
//! stable: hosts grep and alert on them.

use std::fmt;

/// Observable events across the contract, store, and ledger layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Contract surface
    /// Operation invocation received
    ContractInvoke,
    /// Operation finished successfully
    ContractComplete,
    /// Operation rejected with an error
    ContractReject,

    // Record store
    /// New record written
    RecordCreate,
    /// Existing record replaced
    RecordUpdate,
    /// Full-range scan performed
    LedgerScan,
    /// Scan entry failed to decode and degraded to raw text
    ScanEntryUnparsed,

    // File-backed ledger
    /// Snapshot loaded from disk
    LedgerLoad,
    /// Snapshot written to disk
    LedgerPersist,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ContractInvoke => "CONTRACT_INVOKE",
            Event::ContractComplete => "CONTRACT_COMPLETE",
            Event::ContractReject => "CONTRACT_REJECT",
            Event::RecordCreate => "RECORD_CREATE",
            Event::RecordUpdate => "RECORD_UPDATE",
            Event::LedgerScan => "LEDGER_SCAN",
            Event::ScanEntryUnparsed => "SCAN_ENTRY_UNPARSED",
            Event::LedgerLoad => "LEDGER_LOAD",
            Event::LedgerPersist => "LEDGER_PERSIST",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
