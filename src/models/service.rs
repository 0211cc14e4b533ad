//! Service record model
//!
//! One maintenance job done on a bike at a given odometer reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BikeId, ServiceId};
use super::service_type::ServiceType;

/// A completed maintenance job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,

    /// Bike the work was done on
    pub bike_id: BikeId,

    #[serde(rename = "type")]
    pub service_type: ServiceType,

    pub date: NaiveDate,

    /// Odometer reading when the work was done
    pub mileage: u32,

    #[serde(default)]
    pub cost: f64,

    /// Parts used (free text)
    #[serde(default)]
    pub parts: String,

    #[serde(default)]
    pub notes: String,
}

impl ServiceRecord {
    pub fn new(bike_id: BikeId, service_type: ServiceType, date: NaiveDate, mileage: u32) -> Self {
        Self {
            id: ServiceId::new(),
            bike_id,
            service_type,
            date,
            mileage,
            cost: 0.0,
            parts: String::new(),
            notes: String::new(),
        }
    }

    /// Builder-style cost setter
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {} km", self.date, self.service_type, self.mileage)
    }
}
