//! Status and statistics CLI commands

use crate::display::{format_cost_stats, format_status_table};
use crate::error::MotoResult;
use crate::services::{CostAggregator, StatusEngine};
use crate::storage::{Garage, KeyValueStore};

/// Print the maintenance status of every service type
pub fn handle_status_command<S: KeyValueStore>(garage: &Garage<S>) -> MotoResult<()> {
    let unit = garage.settings().distance_unit.label();
    let engine = StatusEngine::for_garage(garage);

    if !garage.has_bike() {
        println!("No bike set up yet. Use 'motolog bike setup' to add one.\n");
    }

    print!(
        "{}",
        format_status_table(&engine.all_statuses(), engine.current_mileage(), unit)
    );

    match engine.attention_count() {
        0 => println!("\nAll services up to date."),
        1 => println!("\n1 service needs attention."),
        n => println!("\n{} services need attention.", n),
    }

    Ok(())
}

/// Print spending totals, per-type costs, fuel economy and the monthly trend
pub fn handle_stats_command<S: KeyValueStore>(garage: &Garage<S>) -> MotoResult<()> {
    let settings = garage.settings();
    let costs = CostAggregator::for_garage(garage);

    print!(
        "{}",
        format_cost_stats(
            costs.total_service_cost(),
            costs.total_fuel_cost(),
            &costs.cost_by_type(),
            &costs.monthly_breakdown(),
        )
    );

    println!("\nFuel");
    println!(
        "  Fill-ups:    {} ({:.1} {})",
        garage.fuel_log().len(),
        costs.total_liters(),
        settings.fuel_unit.label()
    );
    let average = costs.average_consumption();
    if average > 0.0 {
        println!(
            "  Consumption: {:.2} {}/100 {}",
            average,
            settings.fuel_unit.label(),
            settings.distance_unit.label()
        );
    } else {
        println!("  Consumption: needs two full-tank fill-ups");
    }

    Ok(())
}
