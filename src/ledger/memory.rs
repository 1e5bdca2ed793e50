//! In-memory ledger backend

use std::collections::BTreeMap;

use super::{scan_map, LedgerResult, LedgerState};

/// Ledger state held in a sorted in-process map
///
/// Suitable for tests and for embedding the contract in a host that
/// provides durability itself. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerState for MemoryLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        Ok(scan_map(&self.entries, start, end))
    }
}
