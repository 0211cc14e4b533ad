//! Service interval CLI commands

use clap::Subcommand;

use crate::display::report::separator;
use crate::error::MotoResult;
use crate::models::ServiceType;
use crate::services::StatusEngine;
use crate::storage::{Garage, KeyValueStore};

use super::service::parse_service_type;

/// Interval subcommands
#[derive(Subcommand)]
pub enum IntervalCommands {
    /// List the interval for every service type
    List,
    /// Set the interval for a service type
    Set {
        /// Service type (e.g. oil_change, chain, tires)
        service_type: String,
        /// Distance between services
        interval: u32,
    },
}

/// Handle an interval command
pub fn handle_interval_command<S: KeyValueStore>(
    garage: &mut Garage<S>,
    cmd: IntervalCommands,
) -> MotoResult<()> {
    let unit = garage.settings().distance_unit.label();

    match cmd {
        IntervalCommands::List => {
            let engine = StatusEngine::for_garage(garage);

            println!("{:22} {:>10} {:>10}", "Service", "Interval", "Default");
            println!("{}", separator(44));
            for service_type in ServiceType::all() {
                let interval = engine.interval_for(service_type);
                let default = service_type.default_interval_km();
                let marker = if interval != default { "*" } else { "" };
                println!(
                    "{:22} {:>10} {:>10}{}",
                    service_type.label(),
                    interval,
                    default,
                    marker
                );
            }
            println!("\nDistances in {}. * = changed from default", unit);
        }

        IntervalCommands::Set {
            service_type,
            interval,
        } => {
            let service_type = parse_service_type(&service_type)?;
            garage.set_interval(service_type, interval)?;
            println!(
                "{} interval set to {} {}",
                service_type.label(),
                interval,
                unit
            );
        }
    }

    Ok(())
}
