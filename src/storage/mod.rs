//! Storage layer for motolog
//!
//! A key-value store of whole-collection JSON snapshots, and the [`Garage`]
//! that owns the collections and writes each one through on every change.

pub mod file_io;
pub mod garage;
pub mod store;

pub use file_io::{read_optional, write_atomic};
pub use garage::{Garage, BIKES_KEY, FUEL_KEY, INTERVALS_KEY, SERVICES_KEY, SETTINGS_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::config::paths::MotoPaths;
use crate::error::MotoResult;

/// Open the file-backed garage under `paths`, creating directories as needed
pub fn open_garage(paths: &MotoPaths) -> MotoResult<Garage<JsonFileStore>> {
    paths.ensure_directories()?;
    Garage::open(JsonFileStore::new(paths.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_garage_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MotoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let garage = open_garage(&paths).unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.data_dir().join("intervals.json").exists());
        assert!(!paths.is_initialized());
        assert!(garage.bikes().is_empty());
    }
}
