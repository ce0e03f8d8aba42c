//! # Layout store
//!
//! Loads and saves the layout snapshot in a named key-value slot. The store
//! never reports failure to its caller: a missing, unreadable or corrupt slot
//! loads as [`Layout::default`], and a failed write is logged and dropped.
//! A store without a storage backend ([`LayoutStore::detached`]) behaves the
//! same way, which lets the layout engine run headless.

use crate::model::Layout;
use crate::schema;
use crate::storage::KeyValueStorage;
use tracing::{debug, info, warn};

/// Slot name used when none is configured.
pub const DEFAULT_LAYOUT_KEY: &str = "myhome_layout_v1";

/// Load/save interface the layout state depends on.
pub trait LayoutPersistence: Send {
    /// Produce the layout to start from. Must not fail.
    fn load(&self) -> Layout;

    /// Persist `layout`, overwriting whatever was stored before.
    fn save(&mut self, layout: &Layout);
}

/// Persists a [`Layout`] into one slot of a [`KeyValueStorage`].
pub struct LayoutStore {
    storage: Option<Box<dyn KeyValueStorage>>,
    key: String,
}

impl LayoutStore {
    /// Create a store writing to `key` in `storage`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::store::{LayoutPersistence, LayoutStore, DEFAULT_LAYOUT_KEY};
    /// use tripboard_core::storage::MemoryStorage;
    /// use tripboard_core::Layout;
    ///
    /// let store = LayoutStore::new(MemoryStorage::new(), DEFAULT_LAYOUT_KEY);
    /// assert_eq!(store.load(), Layout::default());
    /// ```
    pub fn new<S, K>(storage: S, key: K) -> Self
    where
        S: KeyValueStorage + 'static,
        K: Into<String>,
    {
        Self {
            storage: Some(Box::new(storage)),
            key: key.into(),
        }
    }

    /// A store with no persistence medium: loads the default, saves nothing.
    pub fn detached() -> Self {
        Self {
            storage: None,
            key: DEFAULT_LAYOUT_KEY.to_string(),
        }
    }

    /// Slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a storage backend is attached.
    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }
}

impl LayoutPersistence for LayoutStore {
    fn load(&self) -> Layout {
        let Some(storage) = self.storage.as_ref() else {
            debug!("No layout storage attached, using default layout");
            return Layout::default();
        };

        let raw = match storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved layout in '{}', using default layout", self.key);
                return Layout::default();
            }
            Err(e) => {
                warn!("Failed to read layout: {}. Using default.", e);
                return Layout::default();
            }
        };

        match schema::decode(&raw) {
            Ok(layout) => {
                info!(
                    "Loaded layout from '{}' ({} of {} panels visible)",
                    self.key,
                    layout.visible_panels.len(),
                    layout.panels.len()
                );
                layout
            }
            Err(e) => {
                warn!("Failed to parse layout: {}. Using default.", e);
                Layout::default()
            }
        }
    }

    fn save(&mut self, layout: &Layout) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };

        let content = match schema::encode(layout) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to encode layout: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set(&self.key, &content) {
            warn!("Failed to save layout: {}", e);
        }
    }
}
