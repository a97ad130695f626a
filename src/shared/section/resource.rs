// src/shared/section/resource.rs
use std::fmt::Debug;

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub name: &'static str,
    /// Record label used in notifications ("Skill created successfully").
    pub label: &'static str,
    pub can_create: bool,
    pub can_delete: bool,
    /// Owner-only data: never fetched outside edit mode.
    pub private: bool,
}

pub fn unsupported(operation: &str) -> RequestError {
    RequestError::Status {
        status: 405,
        message: format!("{} is not supported here", operation),
    }
}

//
// ──────────────────────────────────────────────────────────
// Section resource
// ──────────────────────────────────────────────────────────
// One implementation per page section. It owns the store port and knows
// how to turn cached data into a draft and a draft into a store payload.
// Create and delete are only called when the descriptor allows them.
//

#[async_trait]
pub trait SectionResource: Send + Sync + 'static {
    type Data: Clone + Default + Serialize + Send + Sync;
    type Key: Clone + Debug + Serialize + Send + Sync;
    type Draft: Validate + Clone + Serialize + Send + Sync;

    fn descriptor(&self) -> SectionDescriptor;

    async fn fetch(&self) -> Result<Self::Data, RequestError>;

    async fn create(&self, _draft: &Self::Draft) -> Result<(), RequestError> {
        Err(unsupported("Create"))
    }

    async fn update(&self, key: &Self::Key, draft: &Self::Draft) -> Result<(), RequestError>;

    async fn delete(&self, _key: &Self::Key) -> Result<(), RequestError> {
        Err(unsupported("Delete"))
    }

    fn blank_draft(&self, ctx: &SiteContext) -> Self::Draft;

    fn draft_for(&self, data: &Self::Data, key: &Self::Key) -> Option<Self::Draft>;

    /// Checks that need the cached collection, such as unique keys.
    fn check_conflicts(
        &self,
        _data: &Self::Data,
        _key: Option<&Self::Key>,
        _draft: &Self::Draft,
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Label for a specific draft, for sections holding several record kinds.
    fn label_for(&self, _draft: &Self::Draft) -> &'static str {
        self.descriptor().label
    }
}
