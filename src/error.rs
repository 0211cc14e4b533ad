//! Custom error types for motolog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for motolog operations
#[derive(Error, Debug)]
pub enum MotoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MotoError {
    /// Create a "not found" error for bikes
    pub fn bike_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bike",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for service records
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service record",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fuel entries
    pub fn fuel_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fuel entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MotoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for motolog operations
pub type MotoResult<T> = Result<T, MotoError>;
