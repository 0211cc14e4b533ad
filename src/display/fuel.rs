//! Fuel log display formatting

use crate::models::FuelEntry;

use super::report::format_currency;

pub fn format_fuel_row(entry: &FuelEntry, unit: &str, volume: &str) -> String {
    format!(
        "{:14}  {}  {:>7.2} {:3}  {:>8.3}  {:>10}  {:>9} {}  {}",
        entry.id.to_string(),
        entry.date.format("%Y-%m-%d"),
        entry.liters,
        volume,
        entry.cost_per_liter,
        format_currency(entry.total_cost()),
        entry.mileage,
        unit,
        if entry.full_tank { "full" } else { "partial" }
    )
}

/// Format the fuel log with the average consumption underneath
pub fn format_fuel_log(
    entries: &[&FuelEntry],
    average_consumption: f64,
    unit: &str,
    volume: &str,
) -> String {
    if entries.is_empty() {
        return "No fuel entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:14}  {:10}  {:>11}  {:>8}  {:>10}  {:>12}  {}\n",
        "ID", "Date", "Volume", "Price", "Total", "Odometer", "Fill"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_fuel_row(entry, unit, volume));
        output.push('\n');
    }

    output.push('\n');
    if average_consumption > 0.0 {
        output.push_str(&format!(
            "Average consumption: {:.2} {}/100 {}\n",
            average_consumption, volume, unit
        ));
    } else {
        output.push_str("Average consumption: needs two full-tank fill-ups\n");
    }

    output
}
