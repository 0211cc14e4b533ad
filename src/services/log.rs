//! Service log and fuel history listing

use crate::models::{FuelEntry, ServiceRecord, ServiceType};

/// Records matching an optional type filter and a free-text search
///
/// The search matches the type label, parts and notes, case-insensitively.
/// Blank search text matches everything. Newest date first; records on the
/// same date keep their log order.
pub fn filter_services<'a>(
    records: &'a [ServiceRecord],
    service_type: Option<ServiceType>,
    search: &str,
) -> Vec<&'a ServiceRecord> {
    let needle = search.trim().to_lowercase();

    let mut found: Vec<&ServiceRecord> = records
        .iter()
        .filter(|r| service_type.map_or(true, |t| r.service_type == t))
        .filter(|r| {
            needle.is_empty()
                || r.service_type.label().to_lowercase().contains(&needle)
                || r.parts.to_lowercase().contains(&needle)
                || r.notes.to_lowercase().contains(&needle)
        })
        .collect();

    found.sort_by(|a, b| b.date.cmp(&a.date));
    found
}

/// Fuel entries newest date first; entries on the same date keep log order
pub fn fuel_history(entries: &[FuelEntry]) -> Vec<&FuelEntry> {
    let mut history: Vec<&FuelEntry> = entries.iter().collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bike, BikeId};
    use crate::services::ServiceDraft;
    use crate::storage::{Garage, MemoryStore};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<ServiceRecord> {
        let bike_id = BikeId::new();
        let on = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut oil = ServiceRecord::new(bike_id, ServiceType::OilChange, on, 1000);
        oil.parts = "Motul 7100 10W-40".into();
        let mut tires = ServiceRecord::new(bike_id, ServiceType::Tires, on, 2000);
        tires.notes = "Rear only, front still fine".into();
        let chain = ServiceRecord::new(bike_id, ServiceType::Chain, on, 3000);
        vec![oil, tires, chain]
    }

    #[test]
    fn test_no_filter_returns_all() {
        let records = records();
        assert_eq!(filter_services(&records, None, "").len(), 3);
        assert_eq!(filter_services(&records, None, "   ").len(), 3);
    }

    #[test]
    fn test_type_filter() {
        let records = records();
        let found = filter_services(&records, Some(ServiceType::Tires), "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].mileage, 2000);
    }

    #[test]
    fn test_search_matches_label_parts_and_notes() {
        let records = records();
        assert_eq!(filter_services(&records, None, "motul")[0].mileage, 1000);
        assert_eq!(filter_services(&records, None, "REAR")[0].mileage, 2000);
        assert_eq!(filter_services(&records, None, "sprockets")[0].mileage, 3000);
        assert!(filter_services(&records, None, "coolant").is_empty());
    }

    #[test]
    fn test_backdated_record_sorts_below_newer_one() {
        let bike = Bike::new("Tenere");
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        for date in [day(2025, 6, 1), day(2024, 1, 1)] {
            let draft = ServiceDraft {
                service_type: ServiceType::Chain,
                date: Some(date),
                ..ServiceDraft::default()
            };
            garage.add_service(draft.into_record(&bike)).unwrap();
        }

        let listed = filter_services(garage.services(), None, "");
        assert_eq!(listed[0].date, day(2025, 6, 1));
        assert_eq!(listed[1].date, day(2024, 1, 1));
    }

    #[test]
    fn test_same_date_keeps_log_order() {
        let records = records();
        let mileages: Vec<u32> = filter_services(&records, None, "")
            .iter()
            .map(|r| r.mileage)
            .collect();
        assert_eq!(mileages, vec![1000, 2000, 3000]);
    }

    #[test]
    fn test_fuel_history_newest_first() {
        let bike_id = BikeId::new();
        let entries = vec![
            FuelEntry::new(bike_id, day(2025, 3, 1), 10.0, 1.8, 5000),
            FuelEntry::new(bike_id, day(2025, 5, 1), 11.0, 1.9, 5600),
            FuelEntry::new(bike_id, day(2024, 12, 1), 9.0, 1.7, 4500),
            FuelEntry::new(bike_id, day(2025, 5, 1), 4.0, 1.9, 5700),
        ];

        let mileages: Vec<u32> = fuel_history(&entries).iter().map(|e| e.mileage).collect();
        assert_eq!(mileages, vec![5600, 5700, 5000, 4500]);
    }

    #[test]
    fn test_type_and_search_combined() {
        let records = records();
        assert!(filter_services(&records, Some(ServiceType::Chain), "motul").is_empty());
        assert_eq!(
            filter_services(&records, Some(ServiceType::OilChange), "10w").len(),
            1
        );
    }
}
