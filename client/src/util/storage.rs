//! Key-value storage for small pieces of browser-persisted auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pending post-login redirect lives in `sessionStorage` and the
//! provider session in `localStorage`. Both go through `KeyValueStore` so
//! guards and the session hook can be exercised against `MemoryStore`.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: quota or privacy-mode failures are
//! swallowed, and outside `hydrate` `BrowserStorage` is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read `key` and delete it in the same step.
    fn take(&self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        self.remove(key);
        Some(value)
    }
}

/// In-memory store, used in tests and wherever no browser is present.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }
}

/// Which Web Storage area a `BrowserStorage` targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Per-tab, cleared when the tab closes.
    Session,
    /// Persistent across tabs and reloads.
    Local,
}

/// Web Storage backed store.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub const fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    pub const fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Session => window.session_storage(),
            StorageArea::Local => window.local_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Load a JSON value stored under `key`. Undecodable entries read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store.set(key, &raw);
}
