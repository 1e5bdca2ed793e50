//! Measurement unit vocabularies
//!
//! Each sub-reading carries a unit drawn from a closed set. The sets are
//! closed by construction: text becomes a unit only through `FromStr` or
//! serde, so an out-of-vocabulary spelling surfaces as `InvalidUnit` at
//! the boundary and can never reach the range check.
//!
//! The serde renames are the wire spellings; stored state and inbound
//! arguments use them verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{ReadingKind, ValidationError};

/// Units for reported CO2 emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionUnit {
    /// Metric tonnes of CO2
    #[serde(rename = "tCO2")]
    TonnesCo2,
    /// Kilograms of CO2
    #[serde(rename = "kgCO2")]
    KilogramsCo2,
    /// Grams of CO2
    #[serde(rename = "gCO2")]
    GramsCo2,
}

impl EmissionUnit {
    /// Every member, in declaration order
    pub const ALL: [EmissionUnit; 3] = [
        EmissionUnit::TonnesCo2,
        EmissionUnit::KilogramsCo2,
        EmissionUnit::GramsCo2,
    ];

    /// Returns the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionUnit::TonnesCo2 => "tCO2",
            EmissionUnit::KilogramsCo2 => "kgCO2",
            EmissionUnit::GramsCo2 => "gCO2",
        }
    }
}

impl fmt::Display for EmissionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmissionUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tCO2" => Ok(EmissionUnit::TonnesCo2),
            "kgCO2" => Ok(EmissionUnit::KilogramsCo2),
            "gCO2" => Ok(EmissionUnit::GramsCo2),
            other => Err(ValidationError::invalid_unit(ReadingKind::Emissions, other)),
        }
    }
}

/// Units for reported temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[serde(rename = "°C")]
    Celsius,
    /// Degrees Fahrenheit
    #[serde(rename = "°F")]
    Fahrenheit,
    /// Kelvin
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureUnit {
    /// Every member, in declaration order
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Returns the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "°C" => Ok(TemperatureUnit::Celsius),
            "°F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => Err(ValidationError::invalid_unit(
                ReadingKind::Temperature,
                other,
            )),
        }
    }
}

/// Units for reported air pollution concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollutionUnit {
    /// Micrograms per cubic metre
    #[serde(rename = "µg/m³")]
    MicrogramsPerCubicMetre,
    /// Milligrams per cubic metre
    #[serde(rename = "mg/m³")]
    MilligramsPerCubicMetre,
}

impl PollutionUnit {
    /// Every member, in declaration order
    pub const ALL: [PollutionUnit; 2] = [
        PollutionUnit::MicrogramsPerCubicMetre,
        PollutionUnit::MilligramsPerCubicMetre,
    ];

    /// Returns the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            PollutionUnit::MicrogramsPerCubicMetre => "µg/m³",
            PollutionUnit::MilligramsPerCubicMetre => "mg/m³",
        }
    }
}

impl fmt::Display for PollutionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PollutionUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "µg/m³" => Ok(PollutionUnit::MicrogramsPerCubicMetre),
            "mg/m³" => Ok(PollutionUnit::MilligramsPerCubicMetre),
            other => Err(ValidationError::invalid_unit(ReadingKind::Pollution, other)),
        }
    }
}
