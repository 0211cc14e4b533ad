//! Bike model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BikeId;

/// Name given to the placeholder bike when none has been set up
pub const DEFAULT_BIKE_NAME: &str = "My Bike";

/// Model year used when none is given
pub const DEFAULT_YEAR: i32 = 2024;

/// Tank capacity used when none is given, in liters
pub const DEFAULT_FUEL_CAPACITY_L: f64 = 15.0;

/// A tracked motorcycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: BikeId,

    /// Nickname (e.g., "Red Rocket")
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub make: String,

    #[serde(default)]
    pub model: String,

    #[serde(default = "default_year")]
    pub year: i32,

    /// Current odometer reading
    #[serde(default)]
    pub current_mileage: u32,

    /// Fuel tank capacity in liters
    #[serde(default = "default_fuel_capacity")]
    pub fuel_capacity_l: f64,
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_fuel_capacity() -> f64 {
    DEFAULT_FUEL_CAPACITY_L
}

impl Bike {
    /// Create a bike with default specs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BikeId::new(),
            name: name.into(),
            make: String::new(),
            model: String::new(),
            year: DEFAULT_YEAR,
            current_mileage: 0,
            fuel_capacity_l: DEFAULT_FUEL_CAPACITY_L,
        }
    }

    /// "2021 Yamaha MT-07", skipping empty parts
    pub fn description(&self) -> String {
        let year = self.year.to_string();
        [year.as_str(), self.make.trim(), self.model.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Bike {
    fn default() -> Self {
        Self::new(DEFAULT_BIKE_NAME)
    }
}

impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bike() {
        let bike = Bike::default();
        assert_eq!(bike.name, DEFAULT_BIKE_NAME);
        assert_eq!(bike.year, 2024);
        assert_eq!(bike.current_mileage, 0);
        assert_eq!(bike.fuel_capacity_l, 15.0);
    }

    #[test]
    fn test_display() {
        let mut bike = Bike::new("Red Rocket");
        bike.make = "Yamaha".into();
        bike.model = "MT-07".into();
        bike.year = 2021;
        assert_eq!(bike.to_string(), "Red Rocket (2021 Yamaha MT-07)");

        bike.model.clear();
        assert_eq!(bike.description(), "2021 Yamaha");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Old"}"#;
        let bike: Bike = serde_json::from_str(json).unwrap();
        assert_eq!(bike.year, DEFAULT_YEAR);
        assert_eq!(bike.fuel_capacity_l, DEFAULT_FUEL_CAPACITY_L);
    }
}
