//! Service record CLI commands

use clap::Subcommand;

use crate::display::format_service_list;
use crate::error::{MotoError, MotoResult};
use crate::models::ServiceType;
use crate::services::{filter_services, ServiceDraft};
use crate::storage::{Garage, KeyValueStore};

use super::{id_matches, parse_date_arg, resolve_unique};

/// Service subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Log a service
    Add {
        /// Service type (e.g. oil_change, chain, tires)
        service_type: String,
        /// Odometer reading at the service (defaults to the bike's odometer)
        #[arg(short, long)]
        mileage: Option<String>,
        /// Cost of the service
        #[arg(short, long)]
        cost: Option<String>,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Parts used
        #[arg(short, long)]
        parts: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List logged services, newest first
    List {
        /// Only show this service type
        #[arg(short = 't', long = "type")]
        service_type: Option<String>,
        /// Search type, parts and notes
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of records to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Delete a service record
    Delete {
        /// Record ID (as shown by `service list`)
        id: String,
    },
}

/// Parse a service type key or label
pub(crate) fn parse_service_type(text: &str) -> MotoResult<ServiceType> {
    ServiceType::parse(text).ok_or_else(|| {
        let keys: Vec<&str> = ServiceType::all().map(ServiceType::key).collect();
        MotoError::Validation(format!(
            "Unknown service type '{}'. Valid types: {}",
            text,
            keys.join(", ")
        ))
    })
}

/// Handle a service command
pub fn handle_service_command<S: KeyValueStore>(
    garage: &mut Garage<S>,
    cmd: ServiceCommands,
) -> MotoResult<()> {
    let unit = garage.settings().distance_unit.label();

    match cmd {
        ServiceCommands::Add {
            service_type,
            mileage,
            cost,
            date,
            parts,
            notes,
        } => {
            if !garage.has_bike() {
                return Err(MotoError::bike_not_found("active bike"));
            }

            let draft = ServiceDraft {
                service_type: parse_service_type(&service_type)?,
                date: parse_date_arg(date.as_deref())?,
                mileage: mileage.unwrap_or_default(),
                cost: cost.unwrap_or_default(),
                parts: parts.unwrap_or_default(),
                notes: notes.unwrap_or_default(),
            };
            let record = draft.into_record(&garage.active_bike());
            garage.add_service(record.clone())?;

            println!(
                "Logged {} at {} {} on {}",
                record.service_type.label(),
                record.mileage,
                unit,
                record.date
            );
            println!("ID: {}", record.id);
        }

        ServiceCommands::List {
            service_type,
            search,
            limit,
        } => {
            let filter = service_type.as_deref().map(parse_service_type).transpose()?;
            let mut records =
                filter_services(garage.services(), filter, search.as_deref().unwrap_or(""));
            if let Some(limit) = limit {
                records.truncate(limit);
            }

            print!("{}", format_service_list(&records, unit));
        }

        ServiceCommands::Delete { id } => {
            let index = resolve_unique(garage.services(), &id, "Service record", |r| {
                id_matches(r.id.as_uuid(), "svc-", &id)
            })?;
            let record = garage.services()[index].clone();

            if !garage.delete_service(record.id)? {
                return Err(MotoError::service_not_found(id));
            }
            println!("Deleted {} from {}", record.service_type.label(), record.date);
        }
    }

    Ok(())
}
