//! File-backed ledger snapshot
//!
//! A single JSON file holds the whole key space: values base64-encoded,
//! guarded by a CRC32 checksum over the serialized entry map. The
//! checksum is verified on open; a mismatch refuses the load rather than
//! serving damaged state.
//!
//! Every put rewrites the snapshot, which keeps the format trivial and
//! the file always complete. This backend exists for the CLI harness and
//! local development; production state belongs to the hosting platform.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::observability::{log_event, log_event_at, Event, Severity};

use super::{scan_map, LedgerError, LedgerResult, LedgerState};

/// On-disk snapshot envelope
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    /// `crc32:xxxxxxxx` over the serialized entry map
    checksum: String,
    /// RFC 3339 stamp of the last write
    written_at: String,
    /// Key to base64-encoded value
    entries: BTreeMap<String, String>,
}

/// Ledger state persisted as a checksummed JSON snapshot
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
}

impl FileLedger {
    /// Opens the snapshot at `path`, starting empty when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Corrupt` when the snapshot fails to parse,
    /// carries a malformed or mismatching checksum, or holds a value
    /// that is not base64.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| LedgerError::Corrupt(format!("snapshot parse failed: {e}")))?;

        let expected = parse_checksum(&snapshot.checksum).ok_or_else(|| {
            LedgerError::Corrupt(format!("malformed checksum '{}'", snapshot.checksum))
        })?;
        let actual = compute_checksum(encode_entry_map(&snapshot.entries)?.as_bytes());
        if actual != expected {
            return Err(LedgerError::Corrupt(format!(
                "checksum mismatch: stored {}, computed {}",
                snapshot.checksum,
                format_checksum(actual)
            )));
        }

        let mut entries = BTreeMap::new();
        for (key, encoded) in snapshot.entries {
            let value = STANDARD.decode(&encoded).map_err(|e| {
                LedgerError::Corrupt(format!("value under '{key}' is not base64: {e}"))
            })?;
            entries.insert(key, value);
        }

        log_event(
            Event::LedgerLoad,
            &[
                ("path", &path.display().to_string()),
                ("entries", &entries.len().to_string()),
            ],
        );

        Ok(Self { path, entries })
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> LedgerResult<()> {
        let encoded: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), STANDARD.encode(v)))
            .collect();

        let snapshot = Snapshot {
            checksum: format_checksum(compute_checksum(encode_entry_map(&encoded)?.as_bytes())),
            written_at: Utc::now().to_rfc3339(),
            entries: encoded,
        };

        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| LedgerError::Backend(format!("snapshot encode failed: {e}")))?;
        fs::write(&self.path, content)?;

        log_event_at(
            Severity::Trace,
            Event::LedgerPersist,
            &[("entries", &self.entries.len().to_string())],
        );

        Ok(())
    }
}

impl LedgerState for FileLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        self.persist()
    }

    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        Ok(scan_map(&self.entries, start, end))
    }
}

/// The checksum input: the entry map serialized on its own, so the
/// stamp field never affects verification
fn encode_entry_map(entries: &BTreeMap<String, String>) -> LedgerResult<String> {
    serde_json::to_string(entries)
        .map_err(|e| LedgerError::Backend(format!("entry map encode failed: {e}")))
}

fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Format: `crc32:xxxxxxxx` (lowercase hex, zero-padded)
fn format_checksum(checksum: u32) -> String {
    format!("crc32:{:08x}", checksum)
}

fn parse_checksum(formatted: &str) -> Option<u32> {
    let stripped = formatted.strip_prefix("crc32:")?;
    u32::from_str_radix(stripped, 16).ok()
}
