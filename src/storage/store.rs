//! Key-value persistence for whole collections
//!
//! Each logical collection (bikes, services, intervals, fuel, settings) is
//! stored as one JSON value under its key. Loading never fails: a missing,
//! unreadable or undecodable value yields the caller's default.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{MotoError, MotoResult};

use super::file_io::{read_optional, write_atomic};

/// A store of serialized values addressed by key
pub trait KeyValueStore {
    /// Raw serialized value for `key`, if present
    fn read(&self, key: &str) -> MotoResult<Option<String>>;

    /// Replace the raw serialized value for `key`
    fn write(&self, key: &str, contents: &str) -> MotoResult<()>;

    /// Delete the value for `key`; missing keys are not an error
    fn remove(&self, key: &str) -> MotoResult<()>;

    /// Serialize `value` and store it under `key`
    fn save<T>(&self, key: &str, value: &T) -> MotoResult<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let contents = serde_json::to_string_pretty(value)
            .map_err(|e| MotoError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
        self.write(key, &contents)?;
        debug!(key, bytes = contents.len(), "saved collection");
        Ok(())
    }

    /// Load the value under `key`, or `default` if it is absent or unusable
    fn load<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        match self.read(key) {
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(value) => {
                    debug!(key, "loaded collection");
                    value
                }
                Err(e) => {
                    warn!(key, error = %e, "stored value could not be decoded, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "stored value could not be read, using default");
                default
            }
        }
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> MotoResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MotoError::Validation(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> MotoResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn write(&self, key: &str, contents: &str) -> MotoResult<()> {
        write_atomic(self.path_for(key)?, contents.as_bytes())
    }

    fn remove(&self, key: &str) -> MotoResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                MotoError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Volatile store, used by tests and previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data
            .read()
            .map(|data| data.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> MotoResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            MotoError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> MotoResult<()> {
        let mut data = self.data.write().map_err(|e| {
            MotoError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> MotoResult<()> {
        let mut data = self.data.write().map_err(|e| {
            MotoError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn read(&self, key: &str) -> MotoResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> MotoResult<()> {
        (**self).write(key, contents)
    }

    fn remove(&self, key: &str) -> MotoResult<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());

        store.save("numbers", &vec![1, 2, 3]).unwrap();
        assert!(temp_dir.path().join("numbers.json").exists());

        let loaded: Vec<i32> = store.load("numbers", Vec::new());
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());

        let loaded: Vec<String> = store.load("nothing", vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        std::fs::write(temp_dir.path().join("broken.json"), "{not json").unwrap();

        let loaded: Vec<i32> = store.load("broken", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_wrong_shape_returns_default() {
        let store = MemoryStore::new();
        store.write("numbers", r#"{"a": 1}"#).unwrap();

        let loaded: Vec<i32> = store.load("numbers", vec![7]);
        assert_eq!(loaded, vec![7]);
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let store = JsonFileStore::new(PathBuf::from("/tmp"));
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("fuel").is_ok());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());

        store.save("bikes", &Vec::<u8>::new()).unwrap();
        store.remove("bikes").unwrap();
        store.remove("bikes").unwrap();
        assert!(!temp_dir.path().join("bikes.json").exists());

        let memory = MemoryStore::new();
        memory.save("settings", &true).unwrap();
        assert!(memory.contains("settings"));
        memory.remove("settings").unwrap();
        assert!(!memory.contains("settings"));
    }

    #[test]
    fn test_store_by_reference() {
        let memory = MemoryStore::new();
        let by_ref = &memory;
        by_ref.save("count", &3u32).unwrap();
        assert_eq!(memory.load("count", 0u32), 3);
    }
}
