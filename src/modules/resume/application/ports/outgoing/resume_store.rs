// src/modules/resume/application/ports/outgoing/resume_store.rs
use async_trait::async_trait;

use crate::modules::resume::application::domain::entities::{
    ResumeCollections, ResumeItem, ResumeKind,
};
use crate::shared::http::RequestError;

/// Client-local resume collections.
///
/// Failures use the same `RequestError` as the remote stores, so the
/// section controller treats both alike.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn get_all(&self) -> Result<ResumeCollections, RequestError>;

    /// Appends the entry under a freshly generated id; the given id is ignored.
    async fn create(&self, item: ResumeItem) -> Result<ResumeItem, RequestError>;

    /// Replaces the entry with the same kind and id.
    async fn update(&self, item: ResumeItem) -> Result<ResumeItem, RequestError>;

    async fn delete(&self, kind: ResumeKind, id: &str) -> Result<(), RequestError>;
}
