//! Record validation against the physical range table
//!
//! Validation is pure: no I/O, no clock, no mutation. The same record and
//! table always produce the same verdict. Checks run in a fixed order
//! (emissions, then temperature, then pollution) and the first failure
//! wins, so error reporting is deterministic. Absent sub-readings are
//! skipped.
//!
//! Unit-set membership is not checked here: the unit enums are closed, so
//! an out-of-vocabulary unit is rejected wherever text is parsed and a
//! constructed record always carries known units.

use super::bounds::{RangeBound, RangeTable};
use super::errors::{ReadingKind, ValidationError, ValidationResult};
use super::types::ClimateRecord;

/// Validates climate records against a borrowed range table
pub struct RecordValidator<'a> {
    table: &'a RangeTable,
}

impl<'a> RecordValidator<'a> {
    pub fn new(table: &'a RangeTable) -> Self {
        Self { table }
    }

    /// Checks every present sub-reading of `record`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` for the first numeric field
    /// that falls outside its unit's inclusive bounds.
    pub fn validate(&self, record: &ClimateRecord) -> ValidationResult<()> {
        if let Some(emissions) = &record.emissions {
            self.check(
                ReadingKind::Emissions,
                emissions.amount,
                emissions.unit.as_str(),
                self.table.emission(emissions.unit),
            )?;
        }

        if let Some(temperature) = &record.temperature {
            self.check(
                ReadingKind::Temperature,
                temperature.value,
                temperature.unit.as_str(),
                self.table.temperature(temperature.unit),
            )?;
        }

        if let Some(pollution) = &record.pollution {
            self.check(
                ReadingKind::Pollution,
                pollution.level,
                pollution.unit.as_str(),
                self.table.pollution(pollution.unit),
            )?;
        }

        Ok(())
    }

    fn check(
        &self,
        reading: ReadingKind,
        value: f64,
        unit: &str,
        bound: RangeBound,
    ) -> ValidationResult<()> {
        if bound.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(reading, value, unit, bound))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::types::{EmissionReading, PollutionReading, TemperatureReading};
    use crate::record::units::{EmissionUnit, PollutionUnit, TemperatureUnit};

    fn record_with(
        emissions: Option<EmissionReading>,
        temperature: Option<TemperatureReading>,
        pollution: Option<PollutionReading>,
    ) -> ClimateRecord {
        ClimateRecord {
            record_id: "rec-1".to_string(),
            device_id: "device-1".to_string(),
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            emissions,
            temperature,
            pollution,
        }
    }

    #[test]
    fn test_empty_record_is_valid() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        assert!(validator.validate(&record_with(None, None, None)).is_ok());
    }

    #[test]
    fn test_all_readings_in_range() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            Some(EmissionReading::new("em-1", 12.5, EmissionUnit::TonnesCo2)),
            Some(TemperatureReading::new(
                "th-1",
                21.0,
                TemperatureUnit::Celsius,
            )),
            Some(PollutionReading::new(
                "aq-1",
                35.0,
                PollutionUnit::MicrogramsPerCubicMetre,
            )),
        );
        assert!(validator.validate(&record).is_ok());
    }

    #[test]
    fn test_boundary_values_accepted() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);

        let at_min = record_with(
            Some(EmissionReading::new("em-1", 0.0, EmissionUnit::TonnesCo2)),
            Some(TemperatureReading::new(
                "th-1",
                -273.15,
                TemperatureUnit::Celsius,
            )),
            None,
        );
        assert!(validator.validate(&at_min).is_ok());

        let at_max = record_with(
            Some(EmissionReading::new(
                "em-1",
                1_000_000_000.0,
                EmissionUnit::TonnesCo2,
            )),
            Some(TemperatureReading::new(
                "th-1",
                1_500.0,
                TemperatureUnit::Kelvin,
            )),
            Some(PollutionReading::new(
                "aq-1",
                1_000.0,
                PollutionUnit::MilligramsPerCubicMetre,
            )),
        );
        assert!(validator.validate(&at_max).is_ok());
    }

    #[test]
    fn test_negative_emission_amount_rejected() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            Some(EmissionReading::new("em-1", -1.0, EmissionUnit::TonnesCo2)),
            None,
            None,
        );
        let err = validator.validate(&record).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                reading: ReadingKind::Emissions,
                value: -1.0,
                unit: "tCO2".to_string(),
                min: 0.0,
                max: 1_000_000_000.0,
            }
        );
    }

    #[test]
    fn test_temperature_below_absolute_zero_rejected() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            None,
            Some(TemperatureReading::new(
                "th-1",
                -300.0,
                TemperatureUnit::Celsius,
            )),
            None,
        );
        let err = validator.validate(&record).unwrap_err();
        match err {
            ValidationError::OutOfRange {
                reading, min, max, ..
            } => {
                assert_eq!(reading, ReadingKind::Temperature);
                assert_eq!(min, -273.15);
                assert_eq!(max, 1_000.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_check_order_reports_emissions_first() {
        // Two failing readings: the emissions failure must win
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            Some(EmissionReading::new("em-1", -5.0, EmissionUnit::TonnesCo2)),
            Some(TemperatureReading::new(
                "th-1",
                -300.0,
                TemperatureUnit::Celsius,
            )),
            None,
        );
        let err = validator.validate(&record).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                reading: ReadingKind::Emissions,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_rejected_as_out_of_range() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            None,
            Some(TemperatureReading::new(
                "th-1",
                f64::NAN,
                TemperatureUnit::Kelvin,
            )),
            None,
        );
        assert!(matches!(
            validator.validate(&record),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_kg_co2_lower_bound_excludes_zero() {
        let table = RangeTable::new();
        let validator = RecordValidator::new(&table);
        let record = record_with(
            Some(EmissionReading::new("em-1", 0.0, EmissionUnit::KilogramsCo2)),
            None,
            None,
        );
        assert!(validator.validate(&record).is_err());

        let record = record_with(
            Some(EmissionReading::new(
                "em-1",
                0.01,
                EmissionUnit::KilogramsCo2,
            )),
            None,
            None,
        );
        assert!(validator.validate(&record).is_ok());
    }
}
