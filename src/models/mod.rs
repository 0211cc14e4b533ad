//! Core data models for motolog
//!
//! This module contains the data structures of the maintenance domain:
//! bikes, service records, intervals, fuel entries, and the service type
//! catalog.

pub mod bike;
pub mod fuel;
pub mod ids;
pub mod interval;
pub mod service;
pub mod service_type;
pub mod urgency;

pub use bike::Bike;
pub use fuel::FuelEntry;
pub use ids::{BikeId, FuelEntryId, IntervalId, ServiceId};
pub use interval::ServiceInterval;
pub use service::ServiceRecord;
pub use service_type::{ServiceType, ServiceTypeInfo, CATALOG};
pub use urgency::Urgency;
