// src/modules/project/application/ports/outgoing/project_store.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::project::application::domain::entities::{Project, ProjectLink};
use crate::shared::http::RequestError;

/// Body written to the projects collection. Always uses the canonical
/// `technologies`, `github` and `liveUrl` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub category: String,
    pub features: Vec<String>,
    pub links: Vec<ProjectLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Project>, RequestError>;

    async fn get_featured(&self) -> Result<Vec<Project>, RequestError>;

    async fn get(&self, id: &str) -> Result<Project, RequestError>;

    async fn create(&self, payload: &ProjectPayload) -> Result<(), RequestError>;

    async fn update(&self, id: &str, payload: &ProjectPayload) -> Result<(), RequestError>;

    async fn delete(&self, id: &str) -> Result<(), RequestError>;
}
