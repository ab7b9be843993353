//! Browser Storage
//!
//! `KeyValueStore` backed by window.localStorage, with an in-memory fallback
//! when the browser refuses access (private mode, disabled storage).

use todo_core::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_error(&e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_error(&e),
        })
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Storage used by the app model
pub enum BrowserStore {
    Local(WebStorage),
    /// Nothing survives a reload
    Memory(MemoryStore),
}

impl BrowserStore {
    /// localStorage if the browser allows it, memory otherwise
    pub fn open() -> Self {
        match WebStorage::local() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, todos will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage.get(key),
            BrowserStore::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            BrowserStore::Local(storage) => storage.set(key, value),
            BrowserStore::Memory(storage) => storage.set(key, value),
        }
    }
}
