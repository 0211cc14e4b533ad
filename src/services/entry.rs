//! Turning user-entered text into records
//!
//! Form fields arrive as raw text. A field that does not parse falls back to
//! a sensible value instead of rejecting the whole entry: a blank odometer
//! means "the bike's current reading", a blank cost means free.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::bike::DEFAULT_FUEL_CAPACITY_L;
use crate::models::{Bike, FuelEntry, ServiceRecord, ServiceType};

/// Parse an odometer reading; `None` for blank or invalid text
pub fn parse_mileage(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Parse a non-integer quantity (cost, liters, price); rejects NaN and infinities
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a model year
pub fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Year offered for a new bike when none is entered
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Raw fields of the "add service" form
#[derive(Debug, Clone, Default)]
pub struct ServiceDraft {
    pub service_type: ServiceType,
    pub date: Option<NaiveDate>,
    pub mileage: String,
    pub cost: String,
    pub parts: String,
    pub notes: String,
}

impl ServiceDraft {
    /// Build a record for `bike`; unparseable fields take their fallbacks
    pub fn into_record(self, bike: &Bike) -> ServiceRecord {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let mileage = parse_mileage(&self.mileage).unwrap_or(bike.current_mileage);

        let mut record = ServiceRecord::new(bike.id, self.service_type, date, mileage)
            .with_cost(parse_amount(&self.cost).unwrap_or(0.0));
        record.parts = self.parts.trim().to_string();
        record.notes = self.notes.trim().to_string();
        record
    }
}

/// Raw fields of the "add fuel" form
#[derive(Debug, Clone)]
pub struct FuelDraft {
    pub date: Option<NaiveDate>,
    pub liters: String,
    pub price_per_liter: String,
    pub mileage: String,
    pub full_tank: bool,
}

impl Default for FuelDraft {
    fn default() -> Self {
        Self {
            date: None,
            liters: String::new(),
            price_per_liter: String::new(),
            mileage: String::new(),
            full_tank: true,
        }
    }
}

impl FuelDraft {
    pub fn into_entry(self, bike: &Bike) -> FuelEntry {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let mut entry = FuelEntry::new(
            bike.id,
            date,
            parse_amount(&self.liters).unwrap_or(0.0),
            parse_amount(&self.price_per_liter).unwrap_or(0.0),
            parse_mileage(&self.mileage).unwrap_or(bike.current_mileage),
        );
        entry.full_tank = self.full_tank;
        entry
    }
}

/// Raw fields of the bike profile (setup and edit)
///
/// `None` leaves a field untouched when editing.
#[derive(Debug, Clone, Default)]
pub struct BikeProfileDraft {
    pub name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub fuel_capacity: Option<String>,
}

impl BikeProfileDraft {
    /// A brand new bike: year falls back to this year, odometer to 0 and
    /// capacity to the default tank size
    pub fn into_new_bike(self) -> Bike {
        let mut bike = Bike::new("");
        bike.year = current_year();
        bike.fuel_capacity_l = DEFAULT_FUEL_CAPACITY_L;
        let mut bike = self.apply_to(&bike);
        if bike.name.is_empty() {
            bike.name = Bike::default().name;
        }
        bike
    }

    /// Apply the edited fields to `existing`; unparseable numbers keep the
    /// existing value
    pub fn apply_to(self, existing: &Bike) -> Bike {
        let mut bike = existing.clone();
        if let Some(name) = self.name {
            bike.name = name.trim().to_string();
        }
        if let Some(make) = self.make {
            bike.make = make.trim().to_string();
        }
        if let Some(model) = self.model {
            bike.model = model.trim().to_string();
        }
        if let Some(year) = self.year.as_deref().and_then(parse_year) {
            bike.year = year;
        }
        if let Some(mileage) = self.mileage.as_deref().and_then(parse_mileage) {
            bike.current_mileage = mileage;
        }
        if let Some(capacity) = self.fuel_capacity.as_deref().and_then(parse_amount) {
            bike.fuel_capacity_l = capacity;
        }
        bike
    }
}
