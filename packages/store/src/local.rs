//! # localStorage key-value store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes the browser's `window.localStorage` through
//! [`web_sys::Storage`], so values survive page reloads within the same
//! browser profile.
//!
//! ## Error handling
//!
//! `localStorage` can be unavailable (private browsing, disabled storage,
//! quota exceeded). Reads degrade to `None` and writes to a logged no-op, so a
//! broken store behaves like an empty one: the session guard then redirects to
//! the login page instead of crashing the dashboard.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-sized: the storage handle is looked up on every call because
/// `web_sys::Storage` is not `Send` and cannot live in a shared context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, cannot store {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {key} to localStorage");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("Failed to remove {key} from localStorage");
        }
    }
}
