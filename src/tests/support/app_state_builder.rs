use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;

use crate::config::SiteConfig;
use crate::modules::site::application::Page;
use crate::shared::storage::{InMemoryLocalStore, LocalPersistence, LocalStore};
use crate::AppState;

/// Nothing listens on the discard port, so remote calls fail fast.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

pub struct TestAppStateBuilder {
    config: SiteConfig,
    store: Option<Arc<InMemoryLocalStore>>,
    local_entries: HashMap<String, String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            config: SiteConfig {
                api_base_url: UNREACHABLE_API.to_string(),
                ..SiteConfig::default()
            },
            store: None,
            local_entries: HashMap::new(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_api(mut self, base_url: impl Into<String>) -> Self {
        self.config.api_base_url = base_url.into();
        self
    }

    pub fn with_local_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.local_entries.insert(key.to_string(), value.into());
        self
    }

    /// Reuses a store from an earlier page, as after a reload.
    pub fn with_store(mut self, store: Arc<InMemoryLocalStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Resume and learning planner kept in local storage instead of memory.
    pub fn with_persisted_documents(mut self) -> Self {
        self.config.resume_storage = LocalPersistence::Persisted;
        self.config.learning_planner_storage = LocalPersistence::Persisted;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        self.build_with_store().0
    }

    pub fn build_with_store(self) -> (web::Data<AppState>, Arc<InMemoryLocalStore>) {
        let store = match self.store {
            Some(store) => {
                for (key, value) in &self.local_entries {
                    store.set(key, value).expect("in-memory store accepts writes");
                }
                store
            }
            None => Arc::new(InMemoryLocalStore::with_entries(self.local_entries)),
        };

        let local_store: Arc<dyn LocalStore> = store.clone();
        let page = Page::from_config(&self.config, local_store);
        let state = web::Data::new(AppState {
            page: Arc::new(page),
        });
        (state, store)
    }
}
