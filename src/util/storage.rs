//! Key-value preference storage.
//!
//! `BrowserStorage` reads and writes `window.localStorage` in the browser
//! build and is a no-op elsewhere. `MemoryStorage` keeps values in a map and
//! backs the unit tests.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: an unavailable or full storage area
//! is logged and otherwise ignored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Durable string key-value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            leptos::logging::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    leptos::logging::warn!("localStorage read of {key} failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                leptos::logging::warn!("localStorage write of {key} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store that also counts writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of `write` calls since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_owned(), value.to_owned());
    }
}
