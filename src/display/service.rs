//! Service record display formatting

use crate::models::ServiceRecord;

use super::report::{format_currency, truncate};

/// Format a single service record as a table row
pub fn format_service_row(record: &ServiceRecord, unit: &str) -> String {
    let detail = if record.parts.is_empty() {
        record.notes.as_str()
    } else {
        record.parts.as_str()
    };

    format!(
        "{:13}  {}  {}  {:>9} {}  {:>10}  {}",
        record.id.to_string(),
        record.date.format("%Y-%m-%d"),
        truncate(record.service_type.label(), 18),
        record.mileage,
        unit,
        format_currency(record.cost),
        detail
    )
}

/// Format a list of service records
pub fn format_service_list(records: &[&ServiceRecord], unit: &str) -> String {
    if records.is_empty() {
        return "No service records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13}  {:10}  {:18}  {:>12}  {:>10}  {}\n",
        "ID", "Date", "Service", "Mileage", "Cost", "Parts/Notes"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for record in records {
        output.push_str(&format_service_row(record, unit));
        output.push('\n');
    }

    output
}
