//! Full-range scan over stored records
//!
//! Bulk reads degrade per entry instead of aborting the scan, in two
//! steps: a value that is not a well-formed record but still parses as
//! JSON is carried as its parsed JSON value, and only non-JSON text
//! falls back to its raw string form. One damaged entry never hides the
//! rest of the ledger, and legacy JSON entries stay objects for hosts.

use serde::Serialize;

use crate::observability::{log_event_at, Event, Severity};
use crate::record::ClimateRecord;

/// One entry produced by a full scan
///
/// Serializes untagged: hosts receive a record object, a JSON value, or
/// a bare string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScanEntry {
    Record(ClimateRecord),
    Json(serde_json::Value),
    Raw(String),
}

impl ScanEntry {
    pub fn as_record(&self) -> Option<&ClimateRecord> {
        match self {
            ScanEntry::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ScanEntry::Raw(_))
    }
}

/// Cursor over the key range fetched by `RecordStore::scan_all`
///
/// Entries decode lazily in ascending key order. The cursor is not
/// restartable; a fresh `scan_all` re-reads from the smallest key.
#[derive(Debug)]
pub struct RecordScan {
    pairs: std::vec::IntoIter<(String, Vec<u8>)>,
}

impl RecordScan {
    pub(super) fn new(pairs: Vec<(String, Vec<u8>)>) -> Self {
        Self {
            pairs: pairs.into_iter(),
        }
    }

    /// Entries not yet decoded
    pub fn remaining(&self) -> usize {
        self.pairs.len()
    }
}

impl Iterator for RecordScan {
    type Item = ScanEntry;

    fn next(&mut self) -> Option<ScanEntry> {
        let (key, bytes) = self.pairs.next()?;
        Some(decode_entry(&key, &bytes))
    }
}

fn decode_entry(key: &str, bytes: &[u8]) -> ScanEntry {
    let record_err = match ClimateRecord::from_bytes(bytes) {
        Ok(record) => return ScanEntry::Record(record),
        Err(e) => e,
    };

    // Not a record, but valid JSON still reaches hosts as a JSON value
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
        return ScanEntry::Json(value);
    }

    log_event_at(
        Severity::Warn,
        Event::ScanEntryUnparsed,
        &[("key", key), ("reason", &record_err.to_string())],
    );
    ScanEntry::Raw(String::from_utf8_lossy(bytes).into_owned())
}
