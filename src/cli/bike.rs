//! Bike CLI commands
//!
//! Implements CLI commands for the bike profile and odometer.

use clap::Subcommand;

use crate::display::format_bike_details;
use crate::error::{MotoError, MotoResult};
use crate::services::BikeProfileDraft;
use crate::storage::{Garage, KeyValueStore};

/// Bike subcommands
#[derive(Subcommand)]
pub enum BikeCommands {
    /// Set up the bike (starts a fresh service and fuel log)
    Setup {
        /// Bike name
        #[arg(short, long)]
        name: Option<String>,
        /// Manufacturer
        #[arg(long)]
        make: Option<String>,
        /// Model
        #[arg(long)]
        model: Option<String>,
        /// Model year
        #[arg(short, long)]
        year: Option<String>,
        /// Current odometer reading
        #[arg(short, long)]
        mileage: Option<String>,
        /// Fuel tank capacity
        #[arg(short = 't', long)]
        tank: Option<String>,
    },
    /// Show the bike profile
    Show,
    /// Edit the bike profile
    Edit {
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New manufacturer
        #[arg(long)]
        make: Option<String>,
        /// New model
        #[arg(long)]
        model: Option<String>,
        /// New model year
        #[arg(short, long)]
        year: Option<String>,
        /// New odometer reading
        #[arg(short, long)]
        mileage: Option<String>,
        /// New fuel tank capacity
        #[arg(short = 't', long)]
        tank: Option<String>,
    },
    /// Update the odometer reading
    Mileage {
        /// New odometer reading
        reading: u32,
    },
}

/// Handle a bike command
pub fn handle_bike_command<S: KeyValueStore>(
    garage: &mut Garage<S>,
    cmd: BikeCommands,
) -> MotoResult<()> {
    match cmd {
        BikeCommands::Setup {
            name,
            make,
            model,
            year,
            mileage,
            tank,
        } => {
            let replaced_entries = garage.services().len() + garage.fuel_log().len();
            let bike = BikeProfileDraft {
                name,
                make,
                model,
                year,
                mileage,
                fuel_capacity: tank,
            }
            .into_new_bike();

            garage.setup_bike(bike.clone())?;
            garage.complete_onboarding()?;

            println!("Set up bike: {}", bike.name);
            if replaced_entries > 0 {
                println!("Cleared {} previous log entries.", replaced_entries);
            }
            println!("ID: {}", bike.id);
        }

        BikeCommands::Show => {
            if !garage.has_bike() {
                println!("No bike set up yet. Use 'motolog bike setup' to add one.");
                return Ok(());
            }
            print!("{}", format_bike_details(&garage.active_bike(), garage.settings()));
        }

        BikeCommands::Edit {
            name,
            make,
            model,
            year,
            mileage,
            tank,
        } => {
            if !garage.has_bike() {
                return Err(MotoError::bike_not_found("active bike"));
            }

            let draft = BikeProfileDraft {
                name,
                make,
                model,
                year,
                mileage,
                fuel_capacity: tank,
            };
            let updated = draft.apply_to(&garage.active_bike());
            garage.update_bike(updated.clone())?;

            println!("Updated bike: {}", updated.name);
        }

        BikeCommands::Mileage { reading } => {
            let previous = garage.current_mileage();
            if !garage.update_mileage(reading)? {
                return Err(MotoError::bike_not_found("active bike"));
            }

            let unit = garage.settings().distance_unit.label();
            println!("Odometer: {} {} (was {} {})", reading, unit, previous, unit);
        }
    }

    Ok(())
}
