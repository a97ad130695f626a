// src/shared/section/controller.rs
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use crate::shared::context::SiteContext;
use crate::shared::section::{
    EditSession, Notification, SectionDescriptor, SectionError, SectionResource, Validate,
    ViewCache,
};

#[derive(Debug, Clone, Serialize)]
pub struct SectionSnapshot<D, K, T> {
    pub data: D,
    pub loading: bool,
    pub last_error: Option<String>,
    pub session: EditSession<K, T>,
}

pub type SnapshotOf<R> = SectionSnapshot<
    <R as SectionResource>::Data,
    <R as SectionResource>::Key,
    <R as SectionResource>::Draft,
>;

/// View cache plus edit session for one section.
///
/// Locks are only held to copy state in or out; every store call runs
/// with no lock taken.
pub struct Section<R: SectionResource> {
    resource: R,
    context: SiteContext,
    cache: RwLock<ViewCache<R::Data>>,
    session: Mutex<EditSession<R::Key, R::Draft>>,
}

impl<R: SectionResource> Section<R> {
    pub fn new(resource: R, context: SiteContext) -> Self {
        Self {
            resource,
            context,
            cache: RwLock::new(ViewCache::default()),
            session: Mutex::new(EditSession::Closed),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn descriptor(&self) -> SectionDescriptor {
        self.resource.descriptor()
    }

    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    // ──────────────────────────────────────────────────────────
    // Cache
    // ──────────────────────────────────────────────────────────

    pub async fn load(&self) {
        let descriptor = self.descriptor();
        if descriptor.private && !self.context.is_edit_mode() {
            self.cache.write().await.reset();
            return;
        }

        self.cache.write().await.begin_load();
        let result = self.resource.fetch().await;

        if let Err(e) = &result {
            warn!("Failed to load section '{}': {}", descriptor.name, e);
        }

        self.cache.write().await.finish_load(result);
    }

    pub async fn refresh(&self) {
        self.cache.write().await.invalidate();
        self.load().await;
    }

    pub async fn data(&self) -> R::Data {
        self.cache.read().await.data().clone()
    }

    pub async fn snapshot(&self) -> SnapshotOf<R> {
        let cache = self.cache.read().await;
        let session = self.session.lock().await;

        SectionSnapshot {
            data: cache.data().clone(),
            loading: cache.is_loading(),
            last_error: cache.last_error().map(str::to_string),
            session: session.clone(),
        }
    }

    /// Closes the session and drops owner-only data. Used on logout.
    pub async fn reset(&self) {
        self.session.lock().await.close();
        if self.descriptor().private {
            self.cache.write().await.reset();
        }
    }

    // ──────────────────────────────────────────────────────────
    // Edit session
    // ──────────────────────────────────────────────────────────

    fn require_edit_mode(&self) -> Result<(), SectionError> {
        if !self.context.is_edit_mode() {
            return Err(SectionError::EditModeDisabled);
        }
        Ok(())
    }

    fn require_create(&self) -> Result<(), SectionError> {
        if !self.descriptor().can_create {
            return Err(SectionError::Unsupported(format!(
                "New records cannot be added to {}",
                self.descriptor().name
            )));
        }
        Ok(())
    }

    pub async fn open_new(&self) -> Result<(), SectionError> {
        self.require_edit_mode()?;
        self.require_create()?;

        let draft = self.resource.blank_draft(&self.context);
        self.session.lock().await.open_new(draft);
        Ok(())
    }

    /// Opens a new-record session with a prefilled draft.
    pub async fn open_new_with(&self, draft: R::Draft) -> Result<(), SectionError> {
        self.require_edit_mode()?;
        self.require_create()?;

        self.session.lock().await.open_new(draft);
        Ok(())
    }

    pub async fn open_existing(&self, key: R::Key) -> Result<(), SectionError> {
        self.require_edit_mode()?;

        let draft = {
            let cache = self.cache.read().await;
            self.resource.draft_for(cache.data(), &key)
        }
        .ok_or_else(|| SectionError::RecordNotFound(self.descriptor().label.to_string()))?;

        self.session.lock().await.open_existing(key, draft);
        Ok(())
    }

    pub async fn replace_draft(&self, draft: R::Draft) -> Result<(), SectionError> {
        self.require_edit_mode()?;
        self.session.lock().await.replace_draft(draft)?;
        Ok(())
    }

    pub async fn submit(&self) -> Result<Notification, SectionError> {
        self.require_edit_mode()?;

        let (key, draft) = self.session.lock().await.pending()?;
        draft.validate()?;

        {
            let cache = self.cache.read().await;
            self.resource
                .check_conflicts(cache.data(), key.as_ref(), &draft)?;
        }

        let label = self.resource.label_for(&draft);
        let result = match &key {
            Some(key) => self.resource.update(key, &draft).await,
            None => self.resource.create(&draft).await,
        };

        if let Err(e) = result {
            error!("Failed to save {} in '{}': {}", label, self.descriptor().name, e);
            return Err(SectionError::Remote(e));
        }

        self.session.lock().await.close();
        self.refresh().await;

        let verb = if key.is_some() { "updated" } else { "created" };
        info!("{} {} in '{}'", label, verb, self.descriptor().name);
        Ok(Notification::success(format!("{} {} successfully", label, verb)))
    }

    pub async fn delete(&self) -> Result<Notification, SectionError> {
        self.require_edit_mode()?;

        let (key, draft) = self.session.lock().await.deletable()?;
        if !self.descriptor().can_delete {
            return Err(SectionError::Unsupported(format!(
                "Records in {} cannot be deleted",
                self.descriptor().name
            )));
        }

        let label = self.resource.label_for(&draft);
        if let Err(e) = self.resource.delete(&key).await {
            error!("Failed to delete {} {:?}: {}", label, key, e);
            return Err(SectionError::Remote(e));
        }

        self.session.lock().await.close();
        self.refresh().await;

        info!("{} {:?} deleted", label, key);
        Ok(Notification::success(format!("{} deleted successfully", label)))
    }

    pub async fn cancel(&self) {
        self.session.lock().await.close();
    }
}
