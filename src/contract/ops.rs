//! Registered contract operations
//!
//! Every operation takes positional string arguments, the host's lowest
//! common denominator. Parsing happens entirely here: by the time a
//! handler touches the store, text has become typed drafts and keys.
//! Malformed arguments are rejected before any store access.
//!
//! Argument layout shared by `addRecord` (11 args) and `updateRecord`
//! (recordId followed by the same 11):
//!
//! | index | argument            |
//! |-------|---------------------|
//! | 0     | deviceId            |
//! | 1     | emissionSensorId    |
//! | 2     | emissionAmount      |
//! | 3     | emissionUnit        |
//! | 4     | temperatureSensorId |
//! | 5     | temperatureValue    |
//! | 6     | temperatureUnit     |
//! | 7     | pollutionSensorId   |
//! | 8     | pollutionLevel      |
//! | 9     | pollutionUnit       |
//! | 10    | timestamp           |
//!
//! An empty sensorId means that sub-reading is absent; its value and
//! unit arguments are then ignored.

use std::str::FromStr;

use chrono::DateTime;

use crate::record::{EmissionReading, PollutionReading, TemperatureReading, ValidationError};
use crate::store::RecordDraft;

use super::context::TransactionContext;
use super::errors::{ContractError, ContractResult};

/// `addRecord`: writes a new record, returns its id as UTF-8 text
pub(super) fn add_record(
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    const OP: &str = "addRecord";
    require_arity(OP, args, 11)?;
    let draft = draft_from_args(OP, args)?;

    let record_id = ctx.store().create(draft)?;
    Ok(record_id.into_bytes())
}

/// `updateRecord`: replaces the record under the given id in full
pub(super) fn update_record(
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    const OP: &str = "updateRecord";
    require_arity(OP, args, 12)?;
    let record_id = required_text(OP, "recordId", &args[0])?;
    let draft = draft_from_args(OP, &args[1..])?;

    ctx.store().update(&record_id, draft)?;
    Ok(Vec::new())
}

/// `getRecord`: returns the stored record as JSON
pub(super) fn get_record(
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    const OP: &str = "getRecord";
    require_arity(OP, args, 1)?;
    let record_id = required_text(OP, "recordId", &args[0])?;

    let record = ctx.store().get(&record_id)?;
    record
        .to_bytes()
        .map_err(|e| ContractError::Encode(e.to_string()))
}

/// `getAllRecords`: returns a JSON array over the full key range;
/// unparseable entries appear as raw strings
pub(super) fn get_all_records(
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    const OP: &str = "getAllRecords";
    require_arity(OP, args, 0)?;

    let entries = ctx.store().list_all()?;
    serde_json::to_vec(&entries).map_err(|e| ContractError::Encode(e.to_string()))
}

/// `recordExists`: returns `true` or `false` as UTF-8 text
pub(super) fn record_exists(
    ctx: &mut TransactionContext<'_>,
    args: &[String],
) -> ContractResult<Vec<u8>> {
    const OP: &str = "recordExists";
    require_arity(OP, args, 1)?;
    let record_id = required_text(OP, "recordId", &args[0])?;

    let exists = ctx.store().exists(&record_id)?;
    Ok(if exists {
        b"true".to_vec()
    } else {
        b"false".to_vec()
    })
}

/// Builds a draft from the 11-slot argument layout
fn draft_from_args(operation: &'static str, args: &[String]) -> ContractResult<RecordDraft> {
    let device_id = required_text(operation, "deviceId", &args[0])?;
    let timestamp = checked_timestamp(operation, &args[10])?;

    let mut draft = RecordDraft::new(device_id).with_timestamp(timestamp);

    if !args[1].is_empty() {
        let amount = parse_number(operation, "emissionAmount", &args[2])?;
        let unit = parse_unit(&args[3])?;
        draft = draft.with_emissions(EmissionReading::new(args[1].clone(), amount, unit));
    }

    if !args[4].is_empty() {
        let value = parse_number(operation, "temperatureValue", &args[5])?;
        let unit = parse_unit(&args[6])?;
        draft = draft.with_temperature(TemperatureReading::new(args[4].clone(), value, unit));
    }

    if !args[7].is_empty() {
        let level = parse_number(operation, "pollutionLevel", &args[8])?;
        let unit = parse_unit(&args[9])?;
        draft = draft.with_pollution(PollutionReading::new(args[7].clone(), level, unit));
    }

    Ok(draft)
}

fn require_arity(operation: &'static str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::invalid_argument(
            operation,
            format!("expected {expected} arguments, got {}", args.len()),
        ));
    }
    Ok(())
}

fn required_text(
    operation: &'static str,
    name: &'static str,
    value: &str,
) -> ContractResult<String> {
    if value.trim().is_empty() {
        return Err(ContractError::invalid_argument(
            operation,
            format!("{name} must not be blank"),
        ));
    }
    Ok(value.to_string())
}

fn parse_number(operation: &'static str, name: &'static str, text: &str) -> ContractResult<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        ContractError::invalid_argument(operation, format!("{name} '{text}' is not a number"))
    })
}

/// Unit text parses into the closed enums; failure surfaces as the
/// InvalidUnit validation kind, not as a generic argument error
fn parse_unit<U>(text: &str) -> ContractResult<U>
where
    U: FromStr<Err = ValidationError>,
{
    text.parse::<U>().map_err(|e| ContractError::Store(e.into()))
}

/// Timestamps must parse as RFC 3339 but are carried verbatim
fn checked_timestamp(operation: &'static str, text: &str) -> ContractResult<String> {
    if text.trim().is_empty() {
        return Err(ContractError::invalid_argument(
            operation,
            "timestamp must not be blank",
        ));
    }
    DateTime::parse_from_rfc3339(text).map_err(|e| {
        ContractError::invalid_argument(operation, format!("timestamp '{text}' is not RFC 3339: {e}"))
    })?;
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::record::RangeTable;
    use crate::store::IdentityPolicy;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn full_args() -> Vec<String> {
        strings(&[
            "device-7", "em-1", "12.5", "tCO2", "th-1", "21.0", "°C", "aq-1", "35.0", "µg/m³",
            "2024-01-15T10:30:00+00:00",
        ])
    }

    fn run(
        ledger: &mut MemoryLedger,
        table: &RangeTable,
        handler: super::super::registry::OperationFn,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let mut ctx = TransactionContext::new(ledger, table, IdentityPolicy::ContentHash);
        handler(&mut ctx, args)
    }

    #[test]
    fn test_add_record_returns_the_id() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let payload = run(&mut ledger, &table, add_record, &full_args()).unwrap();
        let record_id = String::from_utf8(payload).unwrap();
        assert!(!record_id.is_empty());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_arity_is_enforced_before_store_access() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let err = run(&mut ledger, &table, add_record, &strings(&["device-7"])).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
        assert!(format!("{err}").contains("expected 11 arguments, got 1"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_empty_sensor_id_skips_the_sub_reading() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        // Emissions sensor blank: its value and unit slots are ignored
        let mut args = full_args();
        args[1] = String::new();
        args[2] = "not-a-number".to_string();
        args[3] = "not-a-unit".to_string();

        let payload = run(&mut ledger, &table, add_record, &args).unwrap();
        let record_id = String::from_utf8(payload).unwrap();

        let fetched = run(&mut ledger, &table, get_record, &strings(&[&record_id])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&fetched).unwrap();
        assert!(value.get("emissions").is_none());
        assert_eq!(value["temperature"]["sensorId"], "th-1");
        assert_eq!(value["pollution"]["unit"], "µg/m³");
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let mut args = full_args();
        args[5] = "warm".to_string();

        let err = run(&mut ledger, &table, add_record, &args).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
        assert!(format!("{err}").contains("temperatureValue"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_unit_surfaces_invalid_unit_kind() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let mut args = full_args();
        args[3] = "xyz".to_string();

        let err = run(&mut ledger, &table, add_record, &args).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_UNIT");
        assert!(format!("{err}").contains("'xyz'"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_blank_device_id_rejected() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let mut args = full_args();
        args[0] = "   ".to_string();

        let err = run(&mut ledger, &table, add_record, &args).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
        assert!(format!("{err}").contains("deviceId"));
    }

    #[test]
    fn test_timestamp_must_be_rfc3339() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let mut args = full_args();
        args[10] = "January 15th".to_string();

        let err = run(&mut ledger, &table, add_record, &args).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
        assert!(ledger.is_empty());

        // Zulu suffix is within RFC 3339
        let mut args = full_args();
        args[10] = "2024-01-15T10:30:00Z".to_string();
        assert!(run(&mut ledger, &table, add_record, &args).is_ok());
    }

    #[test]
    fn test_update_record_flow() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let payload = run(&mut ledger, &table, add_record, &full_args()).unwrap();
        let record_id = String::from_utf8(payload).unwrap();

        let mut update_args = vec![record_id.clone()];
        update_args.extend(full_args());
        update_args[3] = "999.0".to_string(); // emissionAmount slot shifted by one

        let payload = run(&mut ledger, &table, update_record, &update_args).unwrap();
        assert!(payload.is_empty());

        let fetched = run(&mut ledger, &table, get_record, &strings(&[&record_id])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&fetched).unwrap();
        assert_eq!(value["emissions"]["amount"], 999.0);
    }

    #[test]
    fn test_update_missing_record_not_found() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let mut args = vec!["rec-missing".to_string()];
        args.extend(full_args());

        let err = run(&mut ledger, &table, update_record, &args).unwrap_err();
        assert_eq!(err.code(), "CLIM_RECORD_NOT_FOUND");
    }

    #[test]
    fn test_record_exists_reports_text_booleans() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let payload = run(
            &mut ledger,
            &table,
            record_exists,
            &strings(&["rec-missing"]),
        )
        .unwrap();
        assert_eq!(payload, b"false");

        let payload = run(&mut ledger, &table, add_record, &full_args()).unwrap();
        let record_id = String::from_utf8(payload).unwrap();

        let payload = run(&mut ledger, &table, record_exists, &strings(&[&record_id])).unwrap();
        assert_eq!(payload, b"true");
    }

    #[test]
    fn test_get_all_records_returns_json_array() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        run(&mut ledger, &table, add_record, &full_args()).unwrap();

        let payload = run(&mut ledger, &table, get_all_records, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["deviceId"], "device-7");
    }

    #[test]
    fn test_get_all_records_takes_no_arguments() {
        let mut ledger = MemoryLedger::new();
        let table = RangeTable::new();

        let err = run(&mut ledger, &table, get_all_records, &strings(&["extra"])).unwrap_err();
        assert_eq!(err.code(), "CLIM_INVALID_ARGUMENT");
    }
}
