// src/shared/storage/local_store.rs
use std::collections::HashMap;
use std::sync::Mutex;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalStoreError {
    #[error("Failed to write local storage: {0}")]
    WriteFailed(String),

    #[error("Failed to encode value: {0}")]
    Encoding(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Synchronous string key/value storage, persisted across restarts by the
// file adapter. It only ever holds client-side state: the admin token,
// the project category list and, when configured, client-local collections.
//

pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), LocalStoreError>;

    fn remove(&self, key: &str) -> Result<(), LocalStoreError>;
}

/// Non-persistent store for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct InMemoryLocalStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl LocalStore for InMemoryLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LocalStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), LocalStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn set_then_get_returns_value() {
        let store = InMemoryLocalStore::default();

        store.set("authToken", "abc").unwrap();

        assert_eq!(store.get("authToken").as_deref(), Some("abc"));
    }

    #[test]
    fn remove_clears_key() {
        let store = InMemoryLocalStore::with_entries(hashmap! {
            "authToken".to_string() => "abc".to_string(),
        });

        store.remove("authToken").unwrap();

        assert!(store.get("authToken").is_none());
    }

    #[test]
    fn removing_missing_key_is_not_an_error() {
        let store = InMemoryLocalStore::default();

        assert!(store.remove("nothing").is_ok());
    }
}
