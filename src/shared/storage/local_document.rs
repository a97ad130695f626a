// src/shared/storage/local_document.rs
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::shared::http::RequestError;
use crate::shared::storage::LocalStore;

/// Where a client-local collection lives between restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalPersistence {
    /// Sample data in memory; edits are lost on restart.
    #[default]
    Ephemeral,
    /// Serialized into local storage, seeded with sample data on first run.
    Persisted,
}

impl FromStr for LocalPersistence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ephemeral" => Ok(LocalPersistence::Ephemeral),
            "persisted" => Ok(LocalPersistence::Persisted),
            other => Err(format!(
                "expected 'ephemeral' or 'persisted', got '{}'",
                other
            )),
        }
    }
}

/// A whole client-local collection held as one value.
///
/// Mutations run against a copy; the copy is persisted (when configured)
/// before it replaces the current state, so a failed write changes nothing.
pub struct LocalDocument<T> {
    state: Mutex<T>,
    backing: Option<(Arc<dyn LocalStore>, &'static str)>,
}

impl<T> LocalDocument<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub fn ephemeral(initial: T) -> Self {
        Self {
            state: Mutex::new(initial),
            backing: None,
        }
    }

    pub fn persisted(store: Arc<dyn LocalStore>, key: &'static str, seed: T) -> Self {
        let initial = match store.get(key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable local document '{}': {}", key, e);
                seed
            }),
            None => seed,
        };

        Self {
            state: Mutex::new(initial),
            backing: Some((store, key)),
        }
    }

    pub fn open(
        persistence: LocalPersistence,
        store: Arc<dyn LocalStore>,
        key: &'static str,
        seed: T,
    ) -> Self {
        match persistence {
            LocalPersistence::Ephemeral => Self::ephemeral(seed),
            LocalPersistence::Persisted => Self::persisted(store, key, seed),
        }
    }

    pub fn snapshot(&self) -> T {
        self.state.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn mutate<R>(
        &self,
        change: impl FnOnce(&mut T) -> Result<R, RequestError>,
    ) -> Result<R, RequestError> {
        let mut state = self.state.lock().unwrap_or_else(|p| p.into_inner());
        let mut next = state.clone();
        let outcome = change(&mut next)?;

        if let Some((store, key)) = &self.backing {
            let encoded =
                serde_json::to_string(&next).map_err(|e| RequestError::Storage(e.to_string()))?;
            store
                .set(key, &encoded)
                .map_err(|e| RequestError::Storage(e.to_string()))?;
        }

        *state = next;
        Ok(outcome)
    }
}
