//! Fuel log entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BikeId, FuelEntryId};

/// One fill-up at the pump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    pub id: FuelEntryId,

    pub bike_id: BikeId,

    pub date: NaiveDate,

    pub liters: f64,

    pub cost_per_liter: f64,

    /// Odometer reading at the pump
    pub mileage: u32,

    /// Whether the tank was filled to the brim. Only full-tank entries
    /// bound a measured consumption interval.
    #[serde(default = "default_full_tank")]
    pub full_tank: bool,
}

fn default_full_tank() -> bool {
    true
}

impl FuelEntry {
    pub fn new(
        bike_id: BikeId,
        date: NaiveDate,
        liters: f64,
        cost_per_liter: f64,
        mileage: u32,
    ) -> Self {
        Self {
            id: FuelEntryId::new(),
            bike_id,
            date,
            liters,
            cost_per_liter,
            mileage,
            full_tank: true,
        }
    }

    /// Amount paid for this fill-up
    pub fn total_cost(&self) -> f64 {
        self.liters * self.cost_per_liter
    }
}

impl fmt::Display for FuelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} L @ {} km", self.date, self.liters, self.mileage)
    }
}
