//! User settings for motolog
//!
//! Display units and onboarding state. Settings are stored as their own
//! collection alongside bikes, services and fuel entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used when showing distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// Parse a distance unit from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Some(Self::Km),
            "mi" | "mile" | "miles" => Some(Self::Miles),
            _ => None,
        }
    }

    /// Short label used after numbers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unit used when showing fuel volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FuelUnit {
    #[default]
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "gal")]
    Gallons,
}

impl FuelUnit {
    /// Parse a fuel unit from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "liter" | "liters" | "litre" | "litres" => Some(Self::Liters),
            "gal" | "gallon" | "gallons" => Some(Self::Gallons),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Liters => "L",
            Self::Gallons => "gal",
        }
    }
}

impl fmt::Display for FuelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// User settings for motolog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the first-run bike setup has been completed
    #[serde(default)]
    pub has_completed_onboarding: bool,

    #[serde(default)]
    pub distance_unit: DistanceUnit,

    #[serde(default)]
    pub fuel_unit: FuelUnit,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            has_completed_onboarding: false,
            distance_unit: DistanceUnit::default(),
            fuel_unit: FuelUnit::default(),
        }
    }
}
