// src/modules/about/application/about_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::about::application::domain::entities::{
    AboutInfo, DEFAULT_DESCRIPTION, DEFAULT_EXPERIENCE, DEFAULT_IMAGE, DEFAULT_TITLE,
};
use crate::modules::about::application::ports::outgoing::{AboutPayload, AboutStore};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, SectionDescriptor, SectionResource, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub struct AboutDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub experience: String,
}

impl Validate for AboutDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)
    }
}

impl From<&AboutDraft> for AboutPayload {
    fn from(draft: &AboutDraft) -> Self {
        AboutPayload {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            image: draft.image.trim().to_string(),
            experience: draft.experience.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AboutView {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub experience: String,
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

impl AboutView {
    pub fn build(data: &Option<AboutInfo>) -> Self {
        let about = data.as_ref();
        let description = or_default(about.map(|a| a.description.as_str()), DEFAULT_DESCRIPTION);

        Self {
            title: or_default(about.map(|a| a.title.as_str()), DEFAULT_TITLE),
            paragraphs: description
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            image: or_default(about.map(|a| a.image.as_str()), DEFAULT_IMAGE),
            experience: or_default(about.map(|a| a.experience.as_str()), DEFAULT_EXPERIENCE),
        }
    }
}

pub struct AboutSection {
    store: Arc<dyn AboutStore>,
}

impl AboutSection {
    pub fn new(store: Arc<dyn AboutStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for AboutSection {
    type Data = Option<AboutInfo>;
    type Key = ();
    type Draft = AboutDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "about",
            label: "About",
            can_create: true,
            can_delete: false,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Self::Data, RequestError> {
        self.store.get().await
    }

    async fn create(&self, draft: &AboutDraft) -> Result<(), RequestError> {
        self.store.create(&AboutPayload::from(draft)).await
    }

    async fn update(&self, _key: &(), draft: &AboutDraft) -> Result<(), RequestError> {
        self.store.update(&AboutPayload::from(draft)).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> AboutDraft {
        AboutDraft::default()
    }

    fn draft_for(&self, data: &Self::Data, _key: &()) -> Option<AboutDraft> {
        data.as_ref().map(|a| AboutDraft {
            title: a.title.clone(),
            description: a.description.clone(),
            image: a.image.clone(),
            experience: a.experience.clone(),
        })
    }
}
