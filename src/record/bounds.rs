//! Physical range bounds for each measurement unit
//!
//! The table is the reference data the validator checks against. It is
//! built once at startup and handed out by reference; nothing mutates it
//! afterwards.

use super::units::{EmissionUnit, PollutionUnit, TemperatureUnit};

/// An inclusive [min, max] interval for one unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound {
    pub min: f64,
    pub max: f64,
}

impl RangeBound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies inside the closed interval.
    /// NaN satisfies no interval.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Unit-to-bound lookup covering every member of the three unit sets
///
/// Lookups are total: the arrays are indexed by enum discriminant in
/// declaration order, so every unit that can be constructed has a bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    emission: [RangeBound; 3],
    temperature: [RangeBound; 3],
    pollution: [RangeBound; 2],
}

impl RangeTable {
    /// Builds the table with the fixed physical bounds
    pub fn new() -> Self {
        Self {
            emission: [
                RangeBound::new(0.0, 1_000_000_000.0), // tCO2
                RangeBound::new(0.01, 10_000_000.0),   // kgCO2
                RangeBound::new(0.001, 10_000_000.0),  // gCO2
            ],
            temperature: [
                RangeBound::new(-273.15, 1_000.0), // °C
                RangeBound::new(-459.67, 1_800.0), // °F
                RangeBound::new(0.0, 1_500.0),     // K
            ],
            pollution: [
                RangeBound::new(0.0, 10_000.0), // µg/m³
                RangeBound::new(0.0, 1_000.0),  // mg/m³
            ],
        }
    }

    /// Bounds for an emission unit
    pub fn emission(&self, unit: EmissionUnit) -> RangeBound {
        self.emission[unit as usize]
    }

    /// Bounds for a temperature unit
    pub fn temperature(&self, unit: TemperatureUnit) -> RangeBound {
        self.temperature[unit as usize]
    }

    /// Bounds for a pollution unit
    pub fn pollution(&self, unit: PollutionUnit) -> RangeBound {
        self.pollution[unit as usize]
    }
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_is_inclusive_on_both_ends() {
        let bound = RangeBound::new(0.01, 10_000_000.0);
        assert!(bound.contains(0.01));
        assert!(bound.contains(10_000_000.0));
        assert!(!bound.contains(0.009_999));
        assert!(!bound.contains(10_000_000.1));
    }

    #[test]
    fn test_nan_satisfies_no_interval() {
        let bound = RangeBound::new(-273.15, 1_000.0);
        assert!(!bound.contains(f64::NAN));
    }

    #[test]
    fn test_every_unit_has_a_bound() {
        let table = RangeTable::new();
        for unit in EmissionUnit::ALL {
            let bound = table.emission(unit);
            assert!(bound.min < bound.max, "degenerate bound for {unit}");
        }
        for unit in TemperatureUnit::ALL {
            let bound = table.temperature(unit);
            assert!(bound.min < bound.max, "degenerate bound for {unit}");
        }
        for unit in PollutionUnit::ALL {
            let bound = table.pollution(unit);
            assert!(bound.min < bound.max, "degenerate bound for {unit}");
        }
    }

    #[test]
    fn test_reference_bounds() {
        let table = RangeTable::new();
        assert_eq!(
            table.emission(EmissionUnit::TonnesCo2),
            RangeBound::new(0.0, 1_000_000_000.0)
        );
        assert_eq!(
            table.temperature(TemperatureUnit::Celsius),
            RangeBound::new(-273.15, 1_000.0)
        );
        assert_eq!(
            table.temperature(TemperatureUnit::Kelvin),
            RangeBound::new(0.0, 1_500.0)
        );
        assert_eq!(
            table.pollution(PollutionUnit::MilligramsPerCubicMetre),
            RangeBound::new(0.0, 1_000.0)
        );
    }
}
