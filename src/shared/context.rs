// src/shared/context.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::shared::http::AUTH_TOKEN_KEY;
use crate::shared::storage::{LocalStore, LocalStoreError};

pub const PROJECT_CATEGORIES_KEY: &str = "projectCategories";
pub const FALLBACK_CATEGORY: &str = "Projects";

//
// ──────────────────────────────────────────────────────────
// Project categories
// ──────────────────────────────────────────────────────────
// Tab names for the projects section. Only the names are persisted
// (as a JSON array); the active tab is per-page state.
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("Edit mode is not enabled")]
    EditModeDisabled,

    #[error("Category name cannot be empty")]
    EmptyName,

    #[error("Category '{0}' already exists")]
    Duplicate(String),

    #[error("No category at position {0}")]
    UnknownIndex(usize),

    #[error("Unknown category '{0}'")]
    UnknownName(String),

    #[error("Failed to save categories: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCategories {
    pub names: Vec<String>,
    pub active: String,
}

impl Default for ProjectCategories {
    fn default() -> Self {
        Self::from_names(vec!["Projects".to_string(), "Mini Projects".to_string()])
    }
}

impl ProjectCategories {
    pub fn from_names(names: Vec<String>) -> Self {
        let active = names
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
        Self { names, active }
    }

    /// Category assigned to records that carry none.
    pub fn first(&self) -> &str {
        self.names
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    fn clean(&self, name: &str, skip: Option<usize>) -> Result<String, CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        let taken = self
            .names
            .iter()
            .enumerate()
            .any(|(i, n)| Some(i) != skip && n == name);
        if taken {
            return Err(CategoryError::Duplicate(name.to_string()));
        }
        Ok(name.to_string())
    }

    pub fn add(&mut self, name: &str) -> Result<(), CategoryError> {
        let name = self.clean(name, None)?;
        self.names.push(name);
        Ok(())
    }

    /// Changes only the tab label. Records still tagged with the old name
    /// no longer match any tab.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<String, CategoryError> {
        if index >= self.names.len() {
            return Err(CategoryError::UnknownIndex(index));
        }
        let name = self.clean(name, Some(index))?;
        let old = std::mem::replace(&mut self.names[index], name.clone());
        if self.active == old {
            self.active = name;
        }
        Ok(old)
    }

    pub fn remove(&mut self, index: usize) -> Result<String, CategoryError> {
        if index >= self.names.len() {
            return Err(CategoryError::UnknownIndex(index));
        }
        let removed = self.names.remove(index);
        if self.active == removed {
            self.active = self.first().to_string();
        }
        Ok(removed)
    }

    pub fn set_active(&mut self, name: &str) -> Result<(), CategoryError> {
        if !self.names.iter().any(|n| n == name) {
            return Err(CategoryError::UnknownName(name.to_string()));
        }
        self.active = name.to_string();
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Site context
// ──────────────────────────────────────────────────────────
//

struct ContextInner {
    local_store: Arc<dyn LocalStore>,
    edit_mode: AtomicBool,
    categories: RwLock<ProjectCategories>,
}

/// State shared by every section of the page: local storage, the
/// edit-mode flag and the project category list.
#[derive(Clone)]
pub struct SiteContext {
    inner: Arc<ContextInner>,
}

impl SiteContext {
    /// Edit mode starts on when a token is already stored.
    pub fn new(local_store: Arc<dyn LocalStore>) -> Self {
        let edit_mode = local_store.get(AUTH_TOKEN_KEY).is_some();
        let categories = Self::load_categories(local_store.as_ref());

        Self {
            inner: Arc::new(ContextInner {
                local_store,
                edit_mode: AtomicBool::new(edit_mode),
                categories: RwLock::new(categories),
            }),
        }
    }

    fn load_categories(store: &dyn LocalStore) -> ProjectCategories {
        match store.get(PROJECT_CATEGORIES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(names) => ProjectCategories::from_names(names),
                Err(e) => {
                    warn!("Ignoring unreadable project categories: {}", e);
                    ProjectCategories::default()
                }
            },
            None => ProjectCategories::default(),
        }
    }

    pub fn local_store(&self) -> Arc<dyn LocalStore> {
        self.inner.local_store.clone()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.inner.edit_mode.load(Ordering::SeqCst)
    }

    pub fn auth_token(&self) -> Option<String> {
        self.inner.local_store.get(AUTH_TOKEN_KEY)
    }

    pub fn grant_edit_mode(&self, token: &str) -> Result<(), LocalStoreError> {
        self.inner.local_store.set(AUTH_TOKEN_KEY, token)?;
        self.inner.edit_mode.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Edit mode is switched off even when the token cannot be removed.
    pub fn revoke_edit_mode(&self) -> Result<(), LocalStoreError> {
        self.inner.edit_mode.store(false, Ordering::SeqCst);
        self.inner.local_store.remove(AUTH_TOKEN_KEY)
    }

    pub fn categories(&self) -> ProjectCategories {
        self.inner
            .categories
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Changing the active tab needs no edit mode and is not persisted.
    pub fn set_active_category(&self, name: &str) -> Result<ProjectCategories, CategoryError> {
        let mut categories = self
            .inner
            .categories
            .write()
            .unwrap_or_else(|p| p.into_inner());
        categories.set_active(name)?;
        Ok(categories.clone())
    }

    /// Applies an owner edit to the category list and persists the names.
    pub fn update_categories<T>(
        &self,
        change: impl FnOnce(&mut ProjectCategories) -> Result<T, CategoryError>,
    ) -> Result<(T, ProjectCategories), CategoryError> {
        if !self.is_edit_mode() {
            return Err(CategoryError::EditModeDisabled);
        }

        let mut categories = self
            .inner
            .categories
            .write()
            .unwrap_or_else(|p| p.into_inner());
        let mut next = categories.clone();
        let outcome = change(&mut next)?;

        let encoded =
            serde_json::to_string(&next.names).map_err(|e| CategoryError::Storage(e.to_string()))?;
        self.inner
            .local_store
            .set(PROJECT_CATEGORIES_KEY, &encoded)
            .map_err(|e| CategoryError::Storage(e.to_string()))?;

        info!("Project categories updated: {:?}", next.names);
        *categories = next.clone();
        Ok((outcome, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::InMemoryLocalStore;
    use maplit::hashmap;

    fn store() -> Arc<dyn LocalStore> {
        Arc::new(InMemoryLocalStore::default())
    }

    #[test]
    fn edit_mode_follows_stored_token() {
        let with_token: Arc<dyn LocalStore> = Arc::new(InMemoryLocalStore::with_entries(hashmap! {
            AUTH_TOKEN_KEY.to_string() => "abc".to_string(),
        }));

        assert!(SiteContext::new(with_token).is_edit_mode());
        assert!(!SiteContext::new(store()).is_edit_mode());
    }

    #[test]
    fn revoke_removes_token() {
        let ctx = SiteContext::new(store());
        ctx.grant_edit_mode("abc").unwrap();

        ctx.revoke_edit_mode().unwrap();

        assert!(!ctx.is_edit_mode());
        assert!(ctx.auth_token().is_none());
    }

    #[test]
    fn default_categories() {
        let ctx = SiteContext::new(store());

        let categories = ctx.categories();

        assert_eq!(categories.names, vec!["Projects", "Mini Projects"]);
        assert_eq!(categories.active, "Projects");
    }

    #[test]
    fn add_trims_and_rejects_duplicates() {
        let mut categories = ProjectCategories::default();

        categories.add("  Research ").unwrap();

        assert_eq!(categories.names.last().unwrap(), "Research");
        assert_eq!(
            categories.add("Research"),
            Err(CategoryError::Duplicate("Research".to_string()))
        );
        assert_eq!(categories.add("   "), Err(CategoryError::EmptyName));
    }

    #[test]
    fn removing_active_category_switches_to_first_remaining() {
        let mut categories = ProjectCategories::default();
        categories.set_active("Mini Projects").unwrap();

        categories.remove(1).unwrap();

        assert_eq!(categories.active, "Projects");
    }

    #[test]
    fn removing_every_category_falls_back_to_default_tab() {
        let mut categories = ProjectCategories::default();

        categories.remove(0).unwrap();
        categories.remove(0).unwrap();

        assert!(categories.names.is_empty());
        assert_eq!(categories.active, FALLBACK_CATEGORY);
        assert_eq!(categories.first(), FALLBACK_CATEGORY);
    }

    #[test]
    fn rename_keeps_active_tab_on_renamed_entry() {
        let mut categories = ProjectCategories::default();

        let old = categories.rename(0, "Featured").unwrap();

        assert_eq!(old, "Projects");
        assert_eq!(categories.names, vec!["Featured", "Mini Projects"]);
        assert_eq!(categories.active, "Featured");
    }

    #[test]
    fn updates_require_edit_mode_and_persist_names() {
        let local = store();
        let ctx = SiteContext::new(local.clone());

        assert_eq!(
            ctx.update_categories(|c| c.add("Research")).unwrap_err(),
            CategoryError::EditModeDisabled
        );

        ctx.grant_edit_mode("abc").unwrap();
        ctx.update_categories(|c| c.add("Research")).unwrap();

        let reloaded = SiteContext::new(local);
        assert_eq!(
            reloaded.categories().names,
            vec!["Projects", "Mini Projects", "Research"]
        );
    }

    #[test]
    fn active_tab_changes_without_edit_mode() {
        let ctx = SiteContext::new(store());

        let categories = ctx.set_active_category("Mini Projects").unwrap();

        assert_eq!(categories.active, "Mini Projects");
        assert!(ctx.set_active_category("Nope").is_err());
    }
}
