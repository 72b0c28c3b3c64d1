//! Durable Key-Value Persistence
//!
//! `KeyValueStorage` abstracts the browser's `localStorage`; `ItemStore` and
//! `ThemeStore` map checklist data onto their own slots. Reads never fail:
//! missing or corrupt data comes back as the default.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use crate::constants::{LIST_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::error::StoreError;
use crate::models::{StoredItem, Theme};

/// String key-value backend
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`, or an in-memory map when the browser refuses it
/// (private mode, disabled storage).
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                warn!("localStorage unavailable, changes will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.set_item(key, value).map_err(|e| StoreError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
            }
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.remove_item(key).map_err(|e| StoreError::Remove {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
            }
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}

/// The checklist slot
#[derive(Debug, Clone)]
pub struct ItemStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> ItemStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, LIST_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// Load saved records. Absent or corrupt data yields an empty list.
    pub fn load(&self) -> Vec<StoredItem> {
        let Some(raw) = self.storage.get(self.key) else {
            debug!("no saved list under '{}'", self.key);
            return Vec::new();
        };

        let records: Vec<StoredItem> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("ignoring corrupt list under '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        let total = records.len();
        let records: Vec<StoredItem> = records
            .into_iter()
            .filter(|r| !r.text.trim().is_empty())
            .collect();
        if records.len() != total {
            warn!("skipped {} saved items with blank text", total - records.len());
        }
        debug!("loaded {} items from '{}'", records.len(), self.key);
        records
    }

    /// Overwrite the slot with `records`. Serialization happens before the
    /// single write, so a failure leaves the previous contents in place.
    pub fn save(&self, records: &[StoredItem]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(records).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set(self.key, &json)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(self.key)
    }
}

/// The theme slot
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Theme {
        self.storage
            .get(THEME_STORAGE_KEY)
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) -> Result<(), StoreError> {
        self.storage.set(THEME_STORAGE_KEY, theme.as_str())
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Memory storage whose writes can be switched off
    #[derive(Clone, Default)]
    pub struct FlakyStorage {
        inner: MemoryStorage,
        pub broken: Rc<Cell<bool>>,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.broken.get() {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "QuotaExceededError".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            if self.broken.get() {
                return Err(StoreError::Remove {
                    key: key.to_string(),
                    reason: "SecurityError".to_string(),
                });
            }
            self.inner.remove(key)
        }
    }
}
