//! Configuration module for motolog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (units, onboarding state)

pub mod paths;
pub mod settings;

pub use paths::MotoPaths;
pub use settings::{DistanceUnit, FuelUnit, Settings};
