//! Maintenance status display
//!
//! One row per service type with its urgency, a gauge bar and how far the
//! next service is.

use crate::services::ServiceStatus;

use super::report::{format_bar, truncate};

const GAUGE_WIDTH: usize = 10;

/// "1200 km left", "500 km overdue", or "-" without a recorded service
pub fn format_distance_left(distance: Option<i64>, unit: &str) -> String {
    match distance {
        None => "-".to_string(),
        Some(d) if d <= 0 => format!("{} {} overdue", -d, unit),
        Some(d) => format!("{} {} left", d, unit),
    }
}

/// Format the status table for all service types
pub fn format_status_table(statuses: &[ServiceStatus<'_>], odometer: u32, unit: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Odometer: {} {}\n\n", odometer, unit));
    output.push_str(&format!(
        "{:18}  {:9}  {:10}  {:>10}  {:>10}  {}\n",
        "Service", "Status", "Life", "Last", "Interval", "Next"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for status in statuses {
        let last = status
            .last_service
            .map(|r| r.mileage.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{}  {:9}  {}  {:>10}  {:>10}  {}\n",
            truncate(status.service_type.label(), 18),
            status.urgency.label(),
            format_bar(status.gauge_fraction, GAUGE_WIDTH),
            last,
            status.interval_km,
            format_distance_left(status.distance_until_due, unit),
        ));
    }

    output
}
