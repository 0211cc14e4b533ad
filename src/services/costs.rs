//! Fuel and cost aggregation
//!
//! Average consumption, spending per service type, totals and a per-month
//! breakdown, all computed from the raw service and fuel lists.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{FuelEntry, ServiceRecord, ServiceType};
use crate::storage::{Garage, KeyValueStore};

/// Calendar month used to bucket costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Total service spending for one type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCost {
    pub service_type: ServiceType,
    pub total: f64,
    pub record_count: usize,
}

/// Service and fuel spending in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCost {
    pub month: MonthKey,
    pub service_cost: f64,
    pub fuel_cost: f64,
}

impl MonthlyCost {
    pub fn total(&self) -> f64 {
        self.service_cost + self.fuel_cost
    }
}

/// Aggregations over one snapshot of the service and fuel logs
#[derive(Debug, Clone, Copy)]
pub struct CostAggregator<'a> {
    services: &'a [ServiceRecord],
    fuel: &'a [FuelEntry],
}

impl<'a> CostAggregator<'a> {
    pub fn new(services: &'a [ServiceRecord], fuel: &'a [FuelEntry]) -> Self {
        Self { services, fuel }
    }

    pub fn for_garage<S: KeyValueStore>(garage: &'a Garage<S>) -> Self {
        Self::new(garage.services(), garage.fuel_log())
    }

    /// Liters per 100 distance units, measured between full-tank fill-ups
    ///
    /// The earliest full-tank fill-up only marks the start of the measured
    /// distance, so its liters are not counted. Returns 0 with fewer than two
    /// full-tank entries or no distance between them.
    pub fn average_consumption(&self) -> f64 {
        let mut full: Vec<&FuelEntry> = self.fuel.iter().filter(|f| f.full_tank).collect();
        if full.len() < 2 {
            return 0.0;
        }
        full.sort_by_key(|f| f.mileage);

        let liters: f64 = full[1..].iter().map(|f| f.liters).sum();
        let first = full[0].mileage;
        let last = full[full.len() - 1].mileage;
        let distance = i64::from(last) - i64::from(first);
        if distance <= 0 {
            return 0.0;
        }

        liters / distance as f64 * 100.0
    }

    /// Spending per service type, largest first; zero totals are left out
    pub fn cost_by_type(&self) -> Vec<TypeCost> {
        let mut totals: BTreeMap<ServiceType, (f64, usize)> = BTreeMap::new();
        for record in self.services {
            let entry = totals.entry(record.service_type).or_insert((0.0, 0));
            entry.0 += record.cost;
            entry.1 += 1;
        }

        let mut by_type: Vec<TypeCost> = totals
            .into_iter()
            .filter(|(_, (total, _))| *total != 0.0)
            .map(|(service_type, (total, record_count))| TypeCost {
                service_type,
                total,
                record_count,
            })
            .collect();

        // Stable sort: equal totals stay in catalog order
        by_type.sort_by(|a, b| b.total.total_cmp(&a.total));
        by_type
    }

    pub fn total_fuel_cost(&self) -> f64 {
        self.fuel.iter().map(FuelEntry::total_cost).sum()
    }

    pub fn total_service_cost(&self) -> f64 {
        self.services.iter().map(|s| s.cost).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_fuel_cost() + self.total_service_cost()
    }

    pub fn total_liters(&self) -> f64 {
        self.fuel.iter().map(|f| f.liters).sum()
    }

    /// One row per month with any service or fuel record, oldest first
    pub fn monthly_breakdown(&self) -> Vec<MonthlyCost> {
        let mut months: BTreeMap<MonthKey, (f64, f64)> = BTreeMap::new();

        for record in self.services {
            months.entry(MonthKey::from_date(record.date)).or_default().0 += record.cost;
        }
        for entry in self.fuel {
            months.entry(MonthKey::from_date(entry.date)).or_default().1 += entry.total_cost();
        }

        months
            .into_iter()
            .map(|(month, (service_cost, fuel_cost))| MonthlyCost {
                month,
                service_cost,
                fuel_cost,
            })
            .collect()
    }
}

/// How full a fill-up of `liters` makes a tank of `capacity_l`, in [0, 1]
pub fn tank_fill_fraction(liters: f64, capacity_l: f64) -> f64 {
    if capacity_l <= 0.0 || liters <= 0.0 || !liters.is_finite() {
        return 0.0;
    }
    (liters / capacity_l).min(1.0)
}
