use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
///
/// Clones share the same map, mirroring how every handle to the browser's
/// `localStorage` sees the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set_item(key, value);
        store
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get_item("token").is_none());

        store.set_item("token", "abc");
        assert_eq!(store.get_item("token").as_deref(), Some("abc"));

        store.set_item("token", "def");
        assert_eq!(store.get_item("token").as_deref(), Some("def"));

        store.remove_item("token");
        assert!(store.get_item("token").is_none());
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("token", "shared");
        assert_eq!(other.get_item("token").as_deref(), Some("shared"));

        other.remove_item("token");
        assert!(store.get_item("token").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::with_item("a", "1");
        store.remove_item("b");
        assert_eq!(store.get_item("a").as_deref(), Some("1"));
    }
}
