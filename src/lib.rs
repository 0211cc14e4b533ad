//! motolog - Motorcycle maintenance log
//!
//! This library provides the core functionality for the motolog application:
//! a service log and fuel log for one motorcycle, the derived due/overdue
//! status of every service type, and cost summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (bikes, service records, intervals, fuel entries)
//! - `storage`: Key-value store and the write-through [`storage::Garage`]
//! - `services`: Maintenance status engine, cost aggregation, entry parsing
//! - `export`: JSON export document
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use motolog::config::paths::MotoPaths;
//! use motolog::services::StatusEngine;
//! use motolog::storage::open_garage;
//!
//! let paths = MotoPaths::new()?;
//! let garage = open_garage(&paths)?;
//! let overdue = StatusEngine::for_garage(&garage).attention_count();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MotoError, MotoResult};
