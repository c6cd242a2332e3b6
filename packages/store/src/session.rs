//! Session credential stored in client-local storage.

use crate::kv::KeyValueStore;

/// Default storage key for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// The actor's session: an opaque bearer token kept under a fixed key.
///
/// Written on login, read on every guarded mount, cleared on logout. Presence
/// of a non-empty value is treated as authentication; no expiry is tracked.
#[derive(Clone, Debug, PartialEq)]
pub struct Session<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session using the default `"token"` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The stored token, if any. Empty values count as absent.
    pub fn get(&self) -> Option<String> {
        self.store
            .get_item(&self.key)
            .filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.store.set_item(&self.key, token);
    }

    pub fn clear(&self) {
        self.store.remove_item(&self.key);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_lifecycle() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());

        session.set("abc123");
        assert_eq!(session.get().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());

        session.clear();
        assert!(session.get().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemoryStore::with_item(DEFAULT_TOKEN_KEY, ""));
        assert!(session.get().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_any_non_empty_value_is_accepted() {
        let session = Session::new(MemoryStore::with_item(DEFAULT_TOKEN_KEY, "not-a-jwt"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let session = Session::with_key(store.clone(), "admission-token");
        session.set("xyz");

        assert_eq!(store.get_item("admission-token").as_deref(), Some("xyz"));
        assert!(store.get_item(DEFAULT_TOKEN_KEY).is_none());
        assert!(session.is_authenticated());
    }
}
