//! Key-value storage backends for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaders take a `&dyn KeyValueStore` instead of branching on the host, so
//! the browser store, the server no-op and the in-memory map are
//! interchangeable in pages and tests.
//!
//! TRADE-OFFS
//! ==========
//! Writes are fire-and-forget. A rejected browser write (quota, private mode)
//! is logged and otherwise ignored; callers cannot observe it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(feature = "hydrate")]
use crate::platform::{Host, detect_host};

/// Capability for reading and writing named string slots.
pub trait KeyValueStore {
    /// Raw stored string for `key`, or `None` when the slot is empty.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` verbatim under `key`.
    fn write(&self, key: &str, value: &str);
}

/// Store used on hosts without persistent storage. Reads nothing, keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}
}

/// In-process store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open the window's local storage. `None` outside a browser or when
    /// storage access is denied.
    #[must_use]
    pub fn open() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            tracing::warn!(%key, error = ?e, "localStorage write rejected");
        }
    }
}

/// Store matching the detected host: browser storage on `Host::Browser`,
/// [`NoopStore`] otherwise.
#[must_use]
pub fn host_store() -> Box<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        if detect_host() == Host::Browser {
            if let Some(storage) = LocalStorage::open() {
                return Box::new(storage);
            }
        }
    }
    Box::new(NoopStore)
}
