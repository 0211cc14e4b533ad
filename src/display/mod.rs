//! Display formatting for terminal output
//!
//! Plain-text tables for the bike profile, service log, fuel log,
//! maintenance status and cost statistics.

pub mod bike;
pub mod fuel;
pub mod report;
pub mod service;
pub mod stats;
pub mod status;

pub use bike::format_bike_details;
pub use fuel::format_fuel_log;
pub use service::format_service_list;
pub use stats::format_cost_stats;
pub use status::format_status_table;
