//! Service layer for motolog
//!
//! Pure derivations over the stored collections (maintenance status, costs,
//! log filtering) and the parsing of user-entered form fields.

pub mod costs;
pub mod entry;
pub mod log;
pub mod status;

pub use costs::{tank_fill_fraction, CostAggregator, MonthKey, MonthlyCost, TypeCost};
pub use entry::{BikeProfileDraft, FuelDraft, ServiceDraft};
pub use log::{filter_services, fuel_history};
pub use status::{ServiceStatus, StatusEngine};
