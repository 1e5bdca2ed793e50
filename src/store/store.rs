//! Record store: identity, validation, serialization, ledger access
//!
//! Writes follow one sequence: assign identity, gate on existence,
//! validate, serialize, put. The ledger is touched last, so a failed
//! operation never leaves partial state behind.

use crate::ledger::LedgerState;
use crate::observability::{log_event, log_event_at, Event, Severity};
use crate::record::{
    ClimateRecord, EmissionReading, PollutionReading, RangeTable, RecordValidator,
    TemperatureReading,
};

use super::errors::{StoreError, StoreResult};
use super::identity::{content_hash_id, random_id, IdentityPolicy};
use super::scan::{RecordScan, ScanEntry};

/// Caller-supplied fields for a create or update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    /// Explicit identity; only meaningful under `CallerSupplied`
    pub record_id: Option<String>,
    pub device_id: String,
    /// ISO-8601 text, stored verbatim
    pub timestamp: String,
    pub emissions: Option<EmissionReading>,
    pub temperature: Option<TemperatureReading>,
    pub pollution: Option<PollutionReading>,
}

impl RecordDraft {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            ..Self::default()
        }
    }

    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_emissions(mut self, reading: EmissionReading) -> Self {
        self.emissions = Some(reading);
        self
    }

    pub fn with_temperature(mut self, reading: TemperatureReading) -> Self {
        self.temperature = Some(reading);
        self
    }

    pub fn with_pollution(mut self, reading: PollutionReading) -> Self {
        self.pollution = Some(reading);
        self
    }

    fn into_record(self, record_id: String) -> ClimateRecord {
        ClimateRecord {
            record_id,
            device_id: self.device_id,
            timestamp: self.timestamp,
            emissions: self.emissions,
            temperature: self.temperature,
            pollution: self.pollution,
        }
    }
}

/// Access layer over the host ledger for climate records
///
/// Borrows the ledger and the range table for the duration of one unit
/// of work. Each operation is at most one read plus one write against
/// the backing store; create's exists-then-put pair is atomic only if
/// the host platform makes it so.
pub struct RecordStore<'a, L: LedgerState + ?Sized> {
    ledger: &'a mut L,
    table: &'a RangeTable,
    policy: IdentityPolicy,
}

impl<'a, L: LedgerState + ?Sized> RecordStore<'a, L> {
    pub fn new(ledger: &'a mut L, table: &'a RangeTable, policy: IdentityPolicy) -> Self {
        Self {
            ledger,
            table,
            policy,
        }
    }

    /// The active identity policy
    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// True iff a non-empty value is stored under the key
    pub fn exists(&self, record_id: &str) -> StoreResult<bool> {
        let stored = self.ledger.get(record_id)?;
        Ok(matches!(stored, Some(value) if !value.is_empty()))
    }

    /// Assembles, validates, and writes a new record.
    /// Returns the identity the record was stored under.
    ///
    /// # Errors
    ///
    /// `Identity` when the draft does not fit the active policy,
    /// `Duplicate` when the key is already taken, `Validation` when a
    /// sub-reading is out of range. Nothing is written on any failure.
    pub fn create(&mut self, draft: RecordDraft) -> StoreResult<String> {
        let record_id = self.assign_identity(&draft)?;

        if self.exists(&record_id)? {
            return Err(StoreError::Duplicate(record_id));
        }

        let record = draft.into_record(record_id.clone());
        RecordValidator::new(self.table).validate(&record)?;
        self.write(&record)?;

        log_event(
            Event::RecordCreate,
            &[
                ("record", &record_id),
                ("device", &record.device_id),
                ("policy", self.policy.as_str()),
            ],
        );

        Ok(record_id)
    }

    /// Validates and replaces the record stored under `record_id` in full.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record is stored, `ImmutableId` when the draft
    /// carries a different id, `Validation` when a sub-reading is out of
    /// range. Nothing is written on any failure.
    pub fn update(&mut self, record_id: &str, draft: RecordDraft) -> StoreResult<()> {
        if !self.exists(record_id)? {
            return Err(StoreError::NotFound(record_id.to_string()));
        }

        if let Some(supplied) = &draft.record_id {
            if supplied != record_id {
                return Err(StoreError::ImmutableId {
                    stored: record_id.to_string(),
                    supplied: supplied.clone(),
                });
            }
        }

        let record = draft.into_record(record_id.to_string());
        RecordValidator::new(self.table).validate(&record)?;
        self.write(&record)?;

        log_event(
            Event::RecordUpdate,
            &[("record", record_id), ("device", &record.device_id)],
        );

        Ok(())
    }

    /// Fetches and strictly decodes the record under `record_id`
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing or empty value, `Unreadable` when the
    /// stored bytes do not parse as a record.
    pub fn get(&self, record_id: &str) -> StoreResult<ClimateRecord> {
        let bytes = self
            .ledger
            .get(record_id)?
            .filter(|value| !value.is_empty())
            .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;

        ClimateRecord::from_bytes(&bytes).map_err(|e| StoreError::Unreadable {
            key: record_id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Scans the full key range in ascending order, decoding lazily
    pub fn scan_all(&self) -> StoreResult<RecordScan> {
        let pairs = self.ledger.range_scan("", "")?;
        log_event_at(
            Severity::Trace,
            Event::LedgerScan,
            &[("entries", &pairs.len().to_string())],
        );
        Ok(RecordScan::new(pairs))
    }

    /// Eagerly materialized `scan_all`. Read-only and repeatable: two
    /// scans with no interleaved write return the same entries.
    pub fn list_all(&self) -> StoreResult<Vec<ScanEntry>> {
        Ok(self.scan_all()?.collect())
    }

    fn assign_identity(&self, draft: &RecordDraft) -> StoreResult<String> {
        match self.policy {
            IdentityPolicy::ContentHash => {
                if draft.record_id.is_some() {
                    return Err(self.identity_error("draft-supplied record id is not accepted"));
                }
                if draft.timestamp.is_empty() {
                    return Err(self.identity_error("timestamp required to derive the record id"));
                }
                Ok(content_hash_id(&draft.device_id, &draft.timestamp))
            }
            IdentityPolicy::CallerSupplied => match &draft.record_id {
                Some(id) if !id.is_empty() => Ok(id.clone()),
                Some(_) => Err(self.identity_error("record id must not be empty")),
                None => Err(self.identity_error("draft carries no record id")),
            },
            IdentityPolicy::Random => {
                if draft.record_id.is_some() {
                    return Err(self.identity_error("draft-supplied record id is not accepted"));
                }
                Ok(random_id())
            }
        }
    }

    fn identity_error(&self, reason: &str) -> StoreError {
        StoreError::Identity {
            policy: self.policy,
            reason: reason.to_string(),
        }
    }

    fn write(&mut self, record: &ClimateRecord) -> StoreResult<()> {
        let bytes = record.to_bytes().map_err(|e| StoreError::Encode {
            key: record.record_id.clone(),
            reason: e.to_string(),
        })?;
        self.ledger.put(&record.record_id, &bytes)?;
        Ok(())
    }
}
