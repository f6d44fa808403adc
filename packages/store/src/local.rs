//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used by the web build. Every call
//! looks up `window.localStorage` afresh; the handle is cheap to obtain and
//! `web_sys::Storage` is not `Send`, so holding on to it buys nothing.
//!
//! All browser errors (storage disabled, quota exceeded, private mode) are
//! swallowed: reads return `None` and writes do nothing. A console that cannot
//! persist its token simply asks for a login on the next page load.

use crate::storage::KeyValueStorage;

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
