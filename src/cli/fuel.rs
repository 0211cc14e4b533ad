//! Fuel log CLI commands

use clap::Subcommand;

use crate::display::format_fuel_log;
use crate::display::report::format_currency;
use crate::error::{MotoError, MotoResult};
use crate::services::{fuel_history, tank_fill_fraction, CostAggregator, FuelDraft};
use crate::storage::{Garage, KeyValueStore};

use super::{id_matches, parse_date_arg, resolve_unique};

/// Fuel subcommands
#[derive(Subcommand)]
pub enum FuelCommands {
    /// Log a fill-up
    Add {
        /// Amount of fuel
        liters: String,
        /// Price per unit of fuel
        #[arg(short, long)]
        price: Option<String>,
        /// Odometer reading at the fill-up (defaults to the bike's odometer)
        #[arg(short, long)]
        mileage: Option<String>,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// The tank was not filled completely
        #[arg(long)]
        partial: bool,
    },
    /// List fill-ups, newest first, with the average consumption
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Delete a fuel entry
    Delete {
        /// Entry ID (as shown by `fuel list`)
        id: String,
    },
}

/// Handle a fuel command
pub fn handle_fuel_command<S: KeyValueStore>(
    garage: &mut Garage<S>,
    cmd: FuelCommands,
) -> MotoResult<()> {
    let unit = garage.settings().distance_unit.label();
    let volume = garage.settings().fuel_unit.label();

    match cmd {
        FuelCommands::Add {
            liters,
            price,
            mileage,
            date,
            partial,
        } => {
            if !garage.has_bike() {
                return Err(MotoError::bike_not_found("active bike"));
            }

            let bike = garage.active_bike();
            let draft = FuelDraft {
                date: parse_date_arg(date.as_deref())?,
                liters,
                price_per_liter: price.unwrap_or_default(),
                mileage: mileage.unwrap_or_default(),
                full_tank: !partial,
            };
            let entry = draft.into_entry(&bike);
            garage.add_fuel(entry.clone())?;

            println!(
                "Logged {:.2} {} for {} at {} {}",
                entry.liters,
                volume,
                format_currency(entry.total_cost()),
                entry.mileage,
                unit
            );
            println!(
                "Tank: {:.0}% of {:.1} {}",
                tank_fill_fraction(entry.liters, bike.fuel_capacity_l) * 100.0,
                bike.fuel_capacity_l,
                volume
            );
            println!("ID: {}", entry.id);
        }

        FuelCommands::List { limit } => {
            let average = CostAggregator::for_garage(garage).average_consumption();
            let mut entries = fuel_history(garage.fuel_log());
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            print!("{}", format_fuel_log(&entries, average, unit, volume));
        }

        FuelCommands::Delete { id } => {
            let index = resolve_unique(garage.fuel_log(), &id, "Fuel entry", |e| {
                id_matches(e.id.as_uuid(), "fuel-", &id)
            })?;
            let entry = garage.fuel_log()[index].clone();

            if !garage.delete_fuel(entry.id)? {
                return Err(MotoError::fuel_entry_not_found(id));
            }
            println!("Deleted fill-up of {:.2} {} from {}", entry.liters, volume, entry.date);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bike;
    use crate::storage::MemoryStore;

    fn garage_with_bike() -> Garage<MemoryStore> {
        let mut garage = Garage::open(MemoryStore::new()).unwrap();
        let mut bike = Bike::new("Africa Twin");
        bike.current_mileage = 12000;
        garage.setup_bike(bike).unwrap();
        garage
    }

    fn add(garage: &mut Garage<MemoryStore>, liters: &str, price: Option<&str>, partial: bool) {
        handle_fuel_command(
            garage,
            FuelCommands::Add {
                liters: liters.to_string(),
                price: price.map(String::from),
                mileage: None,
                date: Some("2025-06-10".into()),
                partial,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_fill_up() {
        let mut garage = garage_with_bike();
        add(&mut garage, "12.5", Some("1.80"), false);

        let entry = &garage.fuel_log()[0];
        assert_eq!(entry.liters, 12.5);
        assert_eq!(entry.cost_per_liter, 1.8);
        assert_eq!(entry.mileage, 12000);
        assert!(entry.full_tank);
    }

    #[test]
    fn test_add_partial_with_bad_numbers() {
        let mut garage = garage_with_bike();
        add(&mut garage, "lots", Some("cheap"), true);

        let entry = &garage.fuel_log()[0];
        assert_eq!(entry.liters, 0.0);
        assert_eq!(entry.cost_per_liter, 0.0);
        assert!(!entry.full_tank);
    }

    #[test]
    fn test_delete_by_short_id() {
        let mut garage = garage_with_bike();
        add(&mut garage, "10", None, false);

        let short = garage.fuel_log()[0].id.to_string();
        handle_fuel_command(&mut garage, FuelCommands::Delete { id: short }).unwrap();
        assert!(garage.fuel_log().is_empty());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut garage = garage_with_bike();
        let result = handle_fuel_command(
            &mut garage,
            FuelCommands::Add {
                liters: "10".into(),
                price: None,
                mileage: None,
                date: Some("yesterday".into()),
                partial: false,
            },
        );
        assert!(result.unwrap_err().is_validation());
        assert!(garage.fuel_log().is_empty());
    }
}
