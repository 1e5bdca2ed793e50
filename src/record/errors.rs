//! Validation error types
//!
//! Validation failures are data, not exceptions: callers branch on the
//! variant, hosts receive the stable `CLIM_*` code.

use std::fmt;

use thiserror::Error;

use super::bounds::RangeBound;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Which sub-reading a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingKind {
    Emissions,
    Temperature,
    Pollution,
}

impl ReadingKind {
    /// Returns the wire name of the sub-reading
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Emissions => "emissions",
            ReadingKind::Temperature => "temperature",
            ReadingKind::Pollution => "pollution",
        }
    }

    /// Returns the name of the numeric field carried by this sub-reading
    pub fn value_field(&self) -> &'static str {
        match self {
            ReadingKind::Emissions => "amount",
            ReadingKind::Temperature => "value",
            ReadingKind::Pollution => "level",
        }
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reason a candidate record was rejected before any write
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The unit text does not name a member of the closed unit set
    #[error("unknown {reading} unit '{unit}'")]
    InvalidUnit { reading: ReadingKind, unit: String },

    /// The numeric field lies outside the unit's inclusive bounds
    #[error("{reading} {} {value} outside [{min}, {max}] for unit '{unit}'", .reading.value_field())]
    OutOfRange {
        reading: ReadingKind,
        value: f64,
        unit: String,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// Unknown unit text for a sub-reading
    pub fn invalid_unit(reading: ReadingKind, unit: impl Into<String>) -> Self {
        ValidationError::InvalidUnit {
            reading,
            unit: unit.into(),
        }
    }

    /// Value outside the inclusive bound for its unit
    pub fn out_of_range(
        reading: ReadingKind,
        value: f64,
        unit: impl Into<String>,
        bound: RangeBound,
    ) -> Self {
        ValidationError::OutOfRange {
            reading,
            value,
            unit: unit.into(),
            min: bound.min,
            max: bound.max,
        }
    }

    /// Stable error code for logs and host payloads
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidUnit { .. } => "CLIM_INVALID_UNIT",
            ValidationError::OutOfRange { .. } => "CLIM_OUT_OF_RANGE",
        }
    }
}
