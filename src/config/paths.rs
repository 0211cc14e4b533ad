//! Path management for motolog
//!
//! Provides XDG-compliant path resolution for the data directory and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `MOTOLOG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/motolog` or `~/.config/motolog`
//! 3. Windows: `%APPDATA%\motolog`

use std::path::PathBuf;

use crate::error::MotoError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MOTOLOG_DATA_DIR";

/// Manages all paths used by motolog
#[derive(Debug, Clone)]
pub struct MotoPaths {
    /// Base directory for all motolog data
    base_dir: PathBuf,
}

impl MotoPaths {
    /// Create a new MotoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, MotoError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MotoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/motolog/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per stored collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path of the persisted settings collection
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Default destination for `motolog export`
    pub fn export_file(&self) -> PathBuf {
        self.base_dir.join("motolog-export.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MotoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MotoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MotoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if motolog has been initialized (settings have been written)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MotoError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                MotoError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("motolog"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MotoError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MotoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("motolog"))
}
