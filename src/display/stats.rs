//! Cost statistics display

use crate::services::{MonthlyCost, TypeCost};

use super::report::{format_bar, format_currency, separator, truncate};

const BAR_WIDTH: usize = 20;

/// Totals, spending per service type and the monthly trend
pub fn format_cost_stats(
    service_total: f64,
    fuel_total: f64,
    by_type: &[TypeCost],
    monthly: &[MonthlyCost],
) -> String {
    let mut output = String::new();

    output.push_str("Totals\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("  Service: {:>12}\n", format_currency(service_total)));
    output.push_str(&format!("  Fuel:    {:>12}\n", format_currency(fuel_total)));
    output.push_str(&format!(
        "  Total:   {:>12}\n",
        format_currency(service_total + fuel_total)
    ));

    output.push_str("\nBy Service Type\n");
    output.push_str(&separator(40));
    output.push('\n');
    if by_type.is_empty() {
        output.push_str("  No data\n");
    } else {
        let max = by_type.iter().map(|t| t.total).fold(0.0, f64::max);
        for row in by_type {
            let fraction = if max > 0.0 { row.total / max } else { 0.0 };
            output.push_str(&format!(
                "  {}  {:>10}  {}\n",
                truncate(row.service_type.label(), 18),
                format_currency(row.total),
                format_bar(fraction, BAR_WIDTH)
            ));
        }
    }

    output.push_str("\nMonthly Spending\n");
    output.push_str(&separator(40));
    output.push('\n');
    if monthly.is_empty() {
        output.push_str("  No data\n");
    } else {
        output.push_str(&format!(
            "  {:7}  {:>10}  {:>10}  {:>10}\n",
            "Month", "Service", "Fuel", "Total"
        ));
        for row in monthly {
            output.push_str(&format!(
                "  {}  {:>10}  {:>10}  {:>10}\n",
                row.month,
                format_currency(row.service_cost),
                format_currency(row.fuel_cost),
                format_currency(row.total())
            ));
        }
    }

    output
}
