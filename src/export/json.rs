//! JSON export
//!
//! Writes the bikes, service records and fuel log as one document with three
//! top-level arrays, for backup and sharing tools. The document is not
//! imported back; [`parse_export`] exists to verify what was written.

use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

use crate::error::{MotoError, MotoResult};
use crate::models::{Bike, FuelEntry, ServiceRecord};
use crate::storage::{Garage, KeyValueStore};

/// The exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageExport {
    pub bikes: Vec<Bike>,
    pub services: Vec<ServiceRecord>,
    pub fuel: Vec<FuelEntry>,
}

impl GarageExport {
    /// Snapshot the garage's collections
    pub fn from_garage<S: KeyValueStore>(garage: &Garage<S>) -> Self {
        Self {
            bikes: garage.bikes().to_vec(),
            services: garage.services().to_vec(),
            fuel: garage.fuel_log().to_vec(),
        }
    }

    /// Every service and fuel entry must belong to an exported bike
    pub fn validate(&self) -> Result<(), String> {
        let bike_ids: std::collections::HashSet<_> = self.bikes.iter().map(|b| b.id).collect();

        for record in &self.services {
            if !bike_ids.contains(&record.bike_id) {
                return Err(format!(
                    "Service record {} references unknown bike {}",
                    record.id, record.bike_id
                ));
            }
        }

        for entry in &self.fuel {
            if !bike_ids.contains(&entry.bike_id) {
                return Err(format!(
                    "Fuel entry {} references unknown bike {}",
                    entry.id, entry.bike_id
                ));
            }
        }

        Ok(())
    }
}

/// Write the export document for `garage` to `writer`
pub fn export_json<S: KeyValueStore, W: Write>(
    garage: &Garage<S>,
    writer: &mut W,
    pretty: bool,
) -> MotoResult<()> {
    let export = GarageExport::from_garage(garage);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| MotoError::Export(e.to_string()))?;

    info!(
        bikes = export.bikes.len(),
        services = export.services.len(),
        fuel = export.fuel.len(),
        "exported garage"
    );
    Ok(())
}

/// Export as a string; an unserializable garage yields `{}`
pub fn export_json_string<S: KeyValueStore>(garage: &Garage<S>, pretty: bool) -> String {
    let mut buffer = Vec::new();
    match export_json(garage, &mut buffer, pretty) {
        Ok(()) => String::from_utf8(buffer).unwrap_or_else(|_| "{}".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            "{}".to_string()
        }
    }
}

/// Read an export document back
pub fn parse_export(json_str: &str) -> MotoResult<GarageExport> {
    serde_json::from_str(json_str).map_err(|e| MotoError::Export(e.to_string()))
}
