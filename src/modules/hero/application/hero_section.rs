// src/modules/hero/application/hero_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::hero::application::domain::entities::{PortfolioInfo, DEFAULT_RESUME_LINK};
use crate::modules::hero::application::ports::outgoing::PortfolioStore;
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, SectionDescriptor, SectionResource, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResumeLinkDraft {
    pub url: String,
}

impl Validate for ResumeLinkDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("url", &self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroView {
    pub resume_link: String,
}

impl HeroView {
    pub fn build(data: &Option<PortfolioInfo>) -> Self {
        let resume_link = data
            .as_ref()
            .map(|p| p.resume_link_or_default().to_string())
            .unwrap_or_else(|| DEFAULT_RESUME_LINK.to_string());
        Self { resume_link }
    }
}

/// The resume download link shown in the hero banner.
pub struct HeroSection {
    store: Arc<dyn PortfolioStore>,
}

impl HeroSection {
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for HeroSection {
    type Data = Option<PortfolioInfo>;
    type Key = ();
    type Draft = ResumeLinkDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "hero",
            label: "Resume link",
            can_create: true,
            can_delete: false,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Self::Data, RequestError> {
        self.store.get().await
    }

    async fn create(&self, draft: &ResumeLinkDraft) -> Result<(), RequestError> {
        self.store.set_resume_link(false, draft.url.trim()).await
    }

    async fn update(&self, _key: &(), draft: &ResumeLinkDraft) -> Result<(), RequestError> {
        self.store.set_resume_link(true, draft.url.trim()).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> ResumeLinkDraft {
        ResumeLinkDraft { url: String::new() }
    }

    fn draft_for(&self, data: &Self::Data, _key: &()) -> Option<ResumeLinkDraft> {
        data.as_ref().map(|p| ResumeLinkDraft {
            url: p.resume_link.clone().unwrap_or_default(),
        })
    }
}
