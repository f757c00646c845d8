//! Key-value storage backends for the record store.
//!
//! The [`KeyValueStorage`] trait is the narrow contract the record store
//! persists through: read one string by key, write one string by key, both
//! asynchronous, both fallible. Two implementations are provided:
//!
//! - [`SledStorage`]: a disk-based database using the `sled` library.
//! - [`MemoryStorage`]: an in-process map for tests and ephemeral sessions.

use async_trait::async_trait;
use directories::ProjectDirs;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{Result, StoreError};

#[cfg(test)]
use mockall::automock;

/// A trait defining the string key-value contract the record store
/// persists through.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Reads the raw string stored under `key`.
    ///
    /// # Returns
    ///
    /// `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the backend is unavailable.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, fully overwriting prior contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the write fails.
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

/// A struct representing a disk-based key-value storage backend.
pub struct SledStorage {
    db: sled::Db,
}

impl SledStorage {
    /// Opens the storage at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SledStorage> {
        let db = sled::open(path)?;
        info!("Record database opened");
        Ok(SledStorage { db })
    }

    /// Opens the storage in the platform data directory, creating the
    /// directory on first use.
    pub fn open_default() -> Result<SledStorage> {
        let proj_dirs = ProjectDirs::from("com", "rentfolio", "rentfolio")
            .ok_or_else(|| {
                StoreError::Io("no home directory available".to_owned())
            })?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Self::open(data_dir.join("records"))
    }
}

#[async_trait]
impl KeyValueStorage for SledStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key)? {
            Some(raw) => {
                let value = String::from_utf8(raw.to_vec())
                    .map_err(|e| StoreError::Io(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.db.insert(key, value.as_bytes())?;
        self.db.flush_async().await?;
        Ok(())
    }
}

/// An in-process storage backend holding everything in a map. The mutex
/// only makes individual get/set calls safe to share; it provides no
/// atomicity across a load-modify-save sequence, same as the disk backend.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Io("storage mutex poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Io("storage mutex poisoned".to_owned()))?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}
