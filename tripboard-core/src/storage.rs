//! # Key-value storage backends
//!
//! The layout is persisted into a single named slot of a key-value store.
//! [`FileStorage`] keeps one JSON file per slot inside a directory and is
//! what the desktop application uses; [`MemoryStorage`] keeps slots in
//! memory and can be cloned so that several owners observe the same slots.

use crate::{storage_error, Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// A string-valued key-value store.
pub trait KeyValueStorage: Send {
    /// Read the value stored under `key`, `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous content.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slots stored as `<key>.json` files inside a directory.
///
/// The directory is created on the first write.
///
/// # Example
///
/// ```rust
/// use tripboard_core::storage::{FileStorage, KeyValueStorage};
///
/// let dir = tempfile::tempdir()?;
/// let mut storage = FileStorage::new(dir.path());
/// storage.set("layout", "{}")?;
/// assert_eq!(storage.get("layout")?, Some("{}".to_string()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `directory`.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Storage in the platform data directory (`<data_dir>/tripboard`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn in_data_dir() -> Result<Self> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join("tripboard")))
            .ok_or_else(|| Error::storage("Could not determine data directory"))
    }

    /// Directory holding the slot files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| storage_error!("Failed to read slot {}: {}", path.display(), e))?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(|e| {
            storage_error!(
                "Failed to create storage directory {}: {}",
                self.directory.display(),
                e
            )
        })?;

        let path = self.slot_path(key);
        std::fs::write(&path, value)
            .map_err(|e| storage_error!("Failed to write slot {}: {}", path.display(), e))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-memory slots shared between clones.
///
/// # Example
///
/// ```rust
/// use tripboard_core::storage::{KeyValueStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// let mut writer = storage.clone();
/// writer.set("slot", "value")?;
/// assert_eq!(storage.get("slot")?, Some("value".to_string()));
/// # Ok::<(), tripboard_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    /// Whether no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| Error::storage("Memory storage lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| Error::storage("Memory storage lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
