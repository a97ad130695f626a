// src/modules/project/application/project_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{Project, ProjectLink};
use crate::modules::project::application::ports::outgoing::{ProjectPayload, ProjectStore};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    clean_list, require_non_empty, require_non_empty_list, SectionDescriptor, SectionResource,
    Validate, ValidationError,
};

pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub live_url: String,
    pub github: String,
    pub category: String,
    pub features: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub rank: Option<i64>,
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("image", &self.image)?;
        require_non_empty_list("technologies", &self.technologies)
    }
}

impl From<&ProjectDraft> for ProjectPayload {
    fn from(draft: &ProjectDraft) -> Self {
        ProjectPayload {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            image: draft.image.trim().to_string(),
            live_url: draft.live_url.trim().to_string(),
            technologies: clean_list(&draft.technologies),
            github: draft.github.trim().to_string(),
            category: draft.category.trim().to_string(),
            features: clean_list(&draft.features),
            links: draft
                .links
                .iter()
                .filter(|l| !l.url.trim().is_empty())
                .map(|l| ProjectLink {
                    label: l.label.trim().to_string(),
                    url: l.url.trim().to_string(),
                })
                .collect(),
            rank: draft.rank,
        }
    }
}

pub struct ProjectSection {
    store: Arc<dyn ProjectStore>,
}

impl ProjectSection {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for ProjectSection {
    type Data = Vec<Project>;
    type Key = String;
    type Draft = ProjectDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "projects",
            label: "Project",
            can_create: true,
            can_delete: true,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Vec<Project>, RequestError> {
        self.store.get_all().await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<(), RequestError> {
        self.store.create(&ProjectPayload::from(draft)).await
    }

    async fn update(&self, id: &String, draft: &ProjectDraft) -> Result<(), RequestError> {
        self.store.update(id, &ProjectPayload::from(draft)).await
    }

    async fn delete(&self, id: &String) -> Result<(), RequestError> {
        self.store.delete(id).await
    }

    fn blank_draft(&self, ctx: &SiteContext) -> ProjectDraft {
        ProjectDraft {
            image: DEFAULT_PROJECT_IMAGE.to_string(),
            category: ctx.categories().first().to_string(),
            ..Default::default()
        }
    }

    fn draft_for(&self, data: &Vec<Project>, id: &String) -> Option<ProjectDraft> {
        data.iter().find(|p| &p.id == id).map(|p| ProjectDraft {
            title: p.title.clone(),
            description: p.description.clone(),
            technologies: p.technologies.clone(),
            image: p.image.clone(),
            live_url: p.live_url.clone(),
            github: p.github.clone(),
            category: p.category.clone().unwrap_or_default(),
            features: p.features.clone(),
            links: p.links.clone(),
            rank: p.rank,
        })
    }
}
