//! Climate record data model
//!
//! The persisted JSON shape is the compatibility contract with existing
//! ledger state:
//!
//! ```json
//! {
//!   "recordId": "...",
//!   "deviceId": "...",
//!   "timestamp": "2024-01-15T10:30:00Z",
//!   "emissions":   { "sensorId": "...", "amount": 12.5, "unit": "tCO2" },
//!   "temperature": { "sensorId": "...", "value": 21.0,  "unit": "°C" },
//!   "pollution":   { "sensorId": "...", "level": 35.0,  "unit": "µg/m³" }
//! }
//! ```
//!
//! Sub-readings are independently optional and omitted from output when
//! absent. Unknown fields in stored JSON are ignored on read so newer
//! writers do not break older readers.

use serde::{Deserialize, Serialize};

use super::units::{EmissionUnit, PollutionUnit, TemperatureUnit};

/// A CO2 emission sub-reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionReading {
    pub sensor_id: String,
    pub amount: f64,
    pub unit: EmissionUnit,
}

impl EmissionReading {
    pub fn new(sensor_id: impl Into<String>, amount: f64, unit: EmissionUnit) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            amount,
            unit,
        }
    }
}

/// A temperature sub-reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub sensor_id: String,
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl TemperatureReading {
    pub fn new(sensor_id: impl Into<String>, value: f64, unit: TemperatureUnit) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            value,
            unit,
        }
    }
}

/// An air pollution sub-reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutionReading {
    pub sensor_id: String,
    pub level: f64,
    pub unit: PollutionUnit,
}

impl PollutionReading {
    pub fn new(sensor_id: impl Into<String>, level: f64, unit: PollutionUnit) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            level,
            unit,
        }
    }
}

/// One device report: identity plus up to three sub-readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateRecord {
    /// Store key; immutable once written
    pub record_id: String,

    /// Reporting device
    pub device_id: String,

    /// ISO-8601 text, carried verbatim as the device supplied it
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pollution: Option<PollutionReading>,
}

impl ClimateRecord {
    /// Serializes to the UTF-8 JSON wire form
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Inverse of `to_bytes`. Unknown fields are ignored; a missing or
    /// mis-typed known field is an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
