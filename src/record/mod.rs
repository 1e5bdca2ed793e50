//! Climate record subsystem
//!
//! Owns the canonical data model for a device report and the validation
//! applied to every write.
//!
//! # Design Principles
//!
//! - Closed unit vocabularies; membership enforced at parse boundaries
//! - Validation before any write, first failure wins
//! - Inclusive physical bounds per unit
//! - Stored JSON round-trips losslessly through the model
//! - No coercion, no unit conversion

mod bounds;
mod errors;
mod types;
mod units;
mod validator;

pub use bounds::{RangeBound, RangeTable};
pub use errors::{ReadingKind, ValidationError, ValidationResult};
pub use types::{ClimateRecord, EmissionReading, PollutionReading, TemperatureReading};
pub use units::{EmissionUnit, PollutionUnit, TemperatureUnit};
pub use validator::RecordValidator;
