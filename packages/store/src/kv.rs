//! # Client-local key-value storage
//!
//! [`KeyValueStore`] is the minimal interface the dashboard needs from the
//! browser's persistent storage: string keys mapped to string values, read and
//! written synchronously. Implementations live in sibling modules
//! ([`crate::memory`] for tests and native builds, `crate::local` for the
//! browser's `localStorage`).
//!
//! All methods take `&self`. Stores are cheap handles that can be cloned into
//! Dioxus contexts and closures; any mutation goes through interior mutability
//! or the underlying browser API.

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}
