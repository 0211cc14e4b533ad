//! CLI command for data export
//!
//! Writes the bikes, service records and fuel log as one JSON document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{MotoError, MotoResult};
use crate::export::{export_json, export_json_string, GarageExport};
use crate::storage::{Garage, KeyValueStore};

/// Handle the export command
///
/// `output` of `-` writes to stdout; no output path uses `default_output`.
pub fn handle_export_command<S: KeyValueStore>(
    garage: &Garage<S>,
    output: Option<PathBuf>,
    default_output: &Path,
    pretty: bool,
) -> MotoResult<()> {
    let output = output.unwrap_or_else(|| default_output.to_path_buf());

    if let Err(problem) = GarageExport::from_garage(garage).validate() {
        warn!(%problem, "exporting entries that reference a missing bike");
    }

    if output.as_os_str() == "-" {
        println!("{}", export_json_string(garage, pretty));
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        MotoError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    export_json(garage, &mut writer, pretty)?;
    writer.flush()?;

    println!(
        "Exported {} bikes, {} services and {} fill-ups to: {}",
        garage.bikes().len(),
        garage.services().len(),
        garage.fuel_log().len(),
        output.display()
    );

    Ok(())
}
