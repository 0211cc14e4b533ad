//! Export module for motolog
//!
//! The JSON backup document consumed by external share/backup tooling.

pub mod json;

pub use json::{export_json, export_json_string, parse_export, GarageExport};
