//! The garage: owner of every collection
//!
//! Holds the bikes, service records, intervals, fuel log and settings in
//! memory. Every mutating method updates memory and then writes the affected
//! collection to the store before returning.

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::MotoResult;
use crate::models::{
    Bike, FuelEntry, FuelEntryId, ServiceId, ServiceInterval, ServiceRecord, ServiceType,
};

use super::store::KeyValueStore;

/// Storage key of the bike list
pub const BIKES_KEY: &str = "bikes";
/// Storage key of the service records
pub const SERVICES_KEY: &str = "services";
/// Storage key of the interval table
pub const INTERVALS_KEY: &str = "intervals";
/// Storage key of the fuel log
pub const FUEL_KEY: &str = "fuel";
/// Storage key of the settings
pub const SETTINGS_KEY: &str = "settings";

/// In-memory collections backed by a key-value store
pub struct Garage<S: KeyValueStore> {
    store: S,
    bikes: Vec<Bike>,
    services: Vec<ServiceRecord>,
    intervals: Vec<ServiceInterval>,
    fuel_log: Vec<FuelEntry>,
    settings: Settings,
}

impl<S: KeyValueStore> Garage<S> {
    /// Load every collection from `store`
    ///
    /// Missing or undecodable collections start empty. An empty interval
    /// table is seeded with the catalog defaults and written back.
    pub fn open(store: S) -> MotoResult<Self> {
        let bikes: Vec<Bike> = store.load(BIKES_KEY, Vec::new());
        let services: Vec<ServiceRecord> = store.load(SERVICES_KEY, Vec::new());
        let intervals: Vec<ServiceInterval> = store.load(INTERVALS_KEY, Vec::new());
        let fuel_log: Vec<FuelEntry> = store.load(FUEL_KEY, Vec::new());
        let settings: Settings = store.load(SETTINGS_KEY, Settings::default());

        let mut garage = Self {
            store,
            bikes,
            services,
            intervals,
            fuel_log,
            settings,
        };

        if garage.intervals.is_empty() {
            debug!("seeding default service intervals");
            garage.intervals = ServiceInterval::defaults();
            garage.persist_intervals()?;
        }

        debug!(
            bikes = garage.bikes.len(),
            services = garage.services.len(),
            fuel = garage.fuel_log.len(),
            "garage opened"
        );
        Ok(garage)
    }

    pub fn bikes(&self) -> &[Bike] {
        &self.bikes
    }

    /// Service records, newest insertion first
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn intervals(&self) -> &[ServiceInterval] {
        &self.intervals
    }

    /// Fuel entries, newest insertion first
    pub fn fuel_log(&self) -> &[FuelEntry] {
        &self.fuel_log
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether a bike has been set up
    pub fn has_bike(&self) -> bool {
        !self.bikes.is_empty()
    }

    /// The first bike, or a placeholder when none has been set up
    pub fn active_bike(&self) -> Bike {
        self.bikes.first().cloned().unwrap_or_default()
    }

    /// Odometer reading of the active bike
    pub fn current_mileage(&self) -> u32 {
        self.bikes.first().map(|b| b.current_mileage).unwrap_or(0)
    }

    /// Make `bike` the only bike and start a fresh log
    pub fn setup_bike(&mut self, bike: Bike) -> MotoResult<()> {
        info!(bike = %bike.id, name = %bike.name, "setting up bike");
        self.bikes = vec![bike];
        self.services.clear();
        self.fuel_log.clear();
        self.persist_bikes()?;
        self.persist_services()?;
        self.persist_fuel()
    }

    /// Replace the active bike's fields wholesale; no-op without a bike
    pub fn update_bike(&mut self, bike: Bike) -> MotoResult<bool> {
        let Some(current) = self.bikes.first_mut() else {
            return Ok(false);
        };
        *current = bike;
        self.persist_bikes()?;
        Ok(true)
    }

    /// Set the active bike's odometer; no-op without a bike
    pub fn update_mileage(&mut self, km: u32) -> MotoResult<bool> {
        let Some(bike) = self.bikes.first_mut() else {
            return Ok(false);
        };
        info!(from = bike.current_mileage, to = km, "updating odometer");
        bike.current_mileage = km;
        self.persist_bikes()?;
        Ok(true)
    }

    pub fn add_service(&mut self, record: ServiceRecord) -> MotoResult<()> {
        info!(service = %record.id, kind = record.service_type.key(), "adding service record");
        self.services.insert(0, record);
        self.persist_services()
    }

    /// Remove the record with `id`; returns whether one was removed
    pub fn delete_service(&mut self, id: ServiceId) -> MotoResult<bool> {
        let Some(pos) = self.services.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        self.services.remove(pos);
        info!(service = %id, "deleted service record");
        self.persist_services()?;
        Ok(true)
    }

    pub fn add_fuel(&mut self, entry: FuelEntry) -> MotoResult<()> {
        info!(fuel = %entry.id, liters = entry.liters, "adding fuel entry");
        self.fuel_log.insert(0, entry);
        self.persist_fuel()
    }

    /// Remove the entry with `id`; returns whether one was removed
    pub fn delete_fuel(&mut self, id: FuelEntryId) -> MotoResult<bool> {
        let Some(pos) = self.fuel_log.iter().position(|f| f.id == id) else {
            return Ok(false);
        };
        self.fuel_log.remove(pos);
        info!(fuel = %id, "deleted fuel entry");
        self.persist_fuel()?;
        Ok(true)
    }

    /// Set the interval for `service_type`, adding a row if it has none
    pub fn set_interval(&mut self, service_type: ServiceType, interval_km: u32) -> MotoResult<()> {
        match self
            .intervals
            .iter()
            .position(|i| i.service_type == service_type)
        {
            Some(pos) => self.intervals[pos].interval_km = interval_km,
            None => self
                .intervals
                .push(ServiceInterval::new(service_type, interval_km)),
        }
        info!(kind = service_type.key(), interval_km, "interval updated");
        self.persist_intervals()
    }

    pub fn update_settings(&mut self, settings: Settings) -> MotoResult<()> {
        self.settings = settings;
        self.persist_settings()
    }

    pub fn complete_onboarding(&mut self) -> MotoResult<()> {
        self.settings.has_completed_onboarding = true;
        self.persist_settings()
    }

    /// Show the first-run setup again on next launch
    pub fn reset_onboarding(&mut self) -> MotoResult<()> {
        self.settings.has_completed_onboarding = false;
        self.persist_settings()
    }

    /// Write every collection, e.g. to materialize defaults on first run
    pub fn save_all(&self) -> MotoResult<()> {
        self.persist_bikes()?;
        self.persist_services()?;
        self.persist_intervals()?;
        self.persist_fuel()?;
        self.persist_settings()
    }

    fn persist_bikes(&self) -> MotoResult<()> {
        self.store.save(BIKES_KEY, &self.bikes)
    }

    fn persist_services(&self) -> MotoResult<()> {
        self.store.save(SERVICES_KEY, &self.services)
    }

    fn persist_intervals(&self) -> MotoResult<()> {
        self.store.save(INTERVALS_KEY, &self.intervals)
    }

    fn persist_fuel(&self) -> MotoResult<()> {
        self.store.save(FUEL_KEY, &self.fuel_log)
    }

    fn persist_settings(&self) -> MotoResult<()> {
        self.store.save(SETTINGS_KEY, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BikeId;
    use crate::storage::{JsonFileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bike(mileage: u32) -> Bike {
        let mut bike = Bike::new("Test Bike");
        bike.current_mileage = mileage;
        bike
    }

    #[test]
    fn test_open_empty_store_seeds_intervals() {
        let store = MemoryStore::new();
        let garage = Garage::open(&store).unwrap();

        assert!(garage.bikes().is_empty());
        assert!(garage.services().is_empty());
        assert_eq!(garage.intervals().len(), ServiceType::all().count());
        assert!(store.contains(INTERVALS_KEY));
        assert_eq!(garage.settings(), &Settings::default());
    }

    #[test]
    fn test_active_bike_placeholder() {
        let garage = Garage::open(MemoryStore::new()).unwrap();
        assert!(!garage.has_bike());
        assert_eq!(garage.active_bike().name, "My Bike");
        assert_eq!(garage.current_mileage(), 0);
    }

    #[test]
    fn test_setup_bike_clears_log() {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        let first = bike(1000);
        garage.setup_bike(first.clone()).unwrap();
        garage
            .add_service(ServiceRecord::new(first.id, ServiceType::OilChange, date(2025, 1, 1), 900))
            .unwrap();
        garage
            .add_fuel(FuelEntry::new(first.id, date(2025, 1, 2), 10.0, 1.8, 950))
            .unwrap();

        let second = bike(50);
        garage.setup_bike(second.clone()).unwrap();

        assert_eq!(garage.bikes(), &[second]);
        assert!(garage.services().is_empty());
        assert!(garage.fuel_log().is_empty());
    }

    #[test]
    fn test_add_inserts_newest_first() {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        let bike_id = BikeId::new();
        let older = ServiceRecord::new(bike_id, ServiceType::Tires, date(2025, 1, 1), 100);
        let newer = ServiceRecord::new(bike_id, ServiceType::Chain, date(2025, 2, 1), 200);

        garage.add_service(older.clone()).unwrap();
        garage.add_service(newer.clone()).unwrap();

        assert_eq!(garage.services()[0].id, newer.id);
        assert_eq!(garage.services()[1].id, older.id);
    }

    #[test]
    fn test_delete_removes_at_most_one() {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        let bike_id = BikeId::new();
        let record = ServiceRecord::new(bike_id, ServiceType::Tires, date(2025, 1, 1), 100);
        let id = record.id;
        garage.add_service(record).unwrap();
        garage
            .add_service(ServiceRecord::new(bike_id, ServiceType::Tires, date(2025, 1, 1), 100))
            .unwrap();

        assert!(garage.delete_service(id).unwrap());
        assert_eq!(garage.services().len(), 1);
        assert!(!garage.delete_service(id).unwrap());

        let entry = FuelEntry::new(bike_id, date(2025, 1, 3), 5.0, 2.0, 150);
        let fuel_id = entry.id;
        garage.add_fuel(entry).unwrap();
        assert!(garage.delete_fuel(fuel_id).unwrap());
        assert!(!garage.delete_fuel(fuel_id).unwrap());
        assert!(garage.fuel_log().is_empty());
    }

    #[test]
    fn test_update_mileage_without_bike_is_noop() {
        let store = MemoryStore::new();
        let mut garage = Garage::open(&store).unwrap();
        assert!(!garage.update_mileage(500).unwrap());
        assert!(!store.contains(BIKES_KEY));

        garage.setup_bike(bike(100)).unwrap();
        assert!(garage.update_mileage(500).unwrap());
        assert_eq!(garage.current_mileage(), 500);
    }

    #[test]
    fn test_update_bike_replaces_fields() {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        assert!(!garage.update_bike(bike(1)).unwrap());

        let original = bike(100);
        garage.setup_bike(original.clone()).unwrap();

        let mut edited = original.clone();
        edited.name = "Renamed".into();
        edited.fuel_capacity_l = 17.5;
        assert!(garage.update_bike(edited.clone()).unwrap());
        assert_eq!(garage.active_bike(), edited);
    }

    #[test]
    fn test_set_interval_updates_existing_row() {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        let rows = garage.intervals().len();

        garage.set_interval(ServiceType::OilChange, 5000).unwrap();

        assert_eq!(garage.intervals().len(), rows);
        let oil = garage
            .intervals()
            .iter()
            .find(|i| i.service_type == ServiceType::OilChange)
            .unwrap();
        assert_eq!(oil.interval_km, 5000);
    }

    #[test]
    fn test_onboarding_flag() {
        let store = MemoryStore::new();
        let mut garage = Garage::open(&store).unwrap();
        garage.complete_onboarding().unwrap();
        assert!(garage.settings().has_completed_onboarding);

        let reopened = Garage::open(&store).unwrap();
        assert!(reopened.settings().has_completed_onboarding);

        garage.reset_onboarding().unwrap();
        assert!(!Garage::open(&store).unwrap().settings().has_completed_onboarding);
    }

    #[test]
    fn test_reopen_reproduces_collections() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());

        let mut garage = Garage::open(store.clone()).unwrap();
        let b = bike(12000);
        garage.setup_bike(b.clone()).unwrap();
        let record = ServiceRecord::new(b.id, ServiceType::OilChange, date(2025, 4, 2), 11800)
            .with_cost(49.99);
        garage.add_service(record.clone()).unwrap();
        let entry = FuelEntry::new(b.id, date(2025, 4, 3), 11.37, 1.829, 11900);
        garage.add_fuel(entry.clone()).unwrap();
        garage.set_interval(ServiceType::Chain, 20000).unwrap();

        let reopened = Garage::open(store).unwrap();
        assert_eq!(reopened.bikes(), &[b]);
        assert_eq!(reopened.services(), &[record]);
        assert_eq!(reopened.fuel_log(), &[entry]);
        assert_eq!(reopened.intervals(), garage.intervals());
    }

    #[test]
    fn test_corrupt_collection_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        std::fs::write(temp_dir.path().join("services.json"), "[{\"id\": 42}]").unwrap();

        let garage = Garage::open(store).unwrap();
        assert!(garage.services().is_empty());
    }
}
