// src/modules/project/adapter/outgoing/project_store_http.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::project::application::domain::entities::{Project, ProjectLink};
use crate::modules::project::application::ports::outgoing::{ProjectPayload, ProjectStore};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

//
// ──────────────────────────────────────────────────────────
// Wire record
// ──────────────────────────────────────────────────────────
// Older records use `tech`, `githubUrl` and `live`; both spellings are read.
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "tech")]
    technologies: Option<Vec<String>>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, alias = "live")]
    live_url: Option<String>,
    #[serde(default, alias = "githubUrl")]
    github: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    features: Option<Vec<String>>,
    #[serde(default)]
    links: Option<Vec<ProjectLink>>,
    #[serde(default)]
    rank: Option<i64>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<ProjectRecord> for Project {
    fn from(r: ProjectRecord) -> Self {
        Project {
            id: r.id,
            title: r.title,
            description: r.description,
            technologies: r.technologies.unwrap_or_default(),
            image: r.image.unwrap_or_default(),
            live_url: r.live_url.unwrap_or_default(),
            github: r.github.unwrap_or_default(),
            category: r.category.filter(|c| !c.trim().is_empty()),
            features: r.features.unwrap_or_default(),
            links: r.links.unwrap_or_default(),
            rank: r.rank,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct ProjectStoreHttp {
    client: RestClient,
}

impl ProjectStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn list(&self, path: &str) -> Result<Vec<Project>, RequestError> {
        let envelope: ApiEnvelope<Vec<ProjectRecord>> = self.client.get(path).await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Project::from)
            .collect())
    }
}

#[async_trait]
impl ProjectStore for ProjectStoreHttp {
    async fn get_all(&self) -> Result<Vec<Project>, RequestError> {
        self.list("/projects").await
    }

    async fn get_featured(&self) -> Result<Vec<Project>, RequestError> {
        self.list("/projects/featured").await
    }

    async fn get(&self, id: &str) -> Result<Project, RequestError> {
        let envelope: ApiEnvelope<ProjectRecord> =
            self.client.get(&format!("/projects/{}", id)).await?;
        envelope
            .data
            .map(Project::from)
            .ok_or_else(|| RequestError::Decode(format!("project '{}' missing", id)))
    }

    async fn create(&self, payload: &ProjectPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> =
            self.client.post("/projects", Some(payload)).await?;
        Ok(())
    }

    async fn update(&self, id: &str, payload: &ProjectPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> =
            self.client.put(&format!("/projects/{}", id), payload).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RequestError> {
        self.client.delete(&format!("/projects/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_field_names_are_read() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{"_id":"p1","title":"Old","description":"d","tech":["Vue"],"githubUrl":"https://github.com/a/b","live":"https://b.example"}"#,
        )
        .unwrap();

        let project = Project::from(record);

        assert_eq!(project.technologies, vec!["Vue"]);
        assert_eq!(project.github, "https://github.com/a/b");
        assert_eq!(project.live_url, "https://b.example");
    }

    #[test]
    fn canonical_field_names_are_read() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{"_id":"p2","title":"New","description":"d","technologies":["Rust"],"github":"g","liveUrl":"l","rank":3,"category":""}"#,
        )
        .unwrap();

        let project = Project::from(record);

        assert_eq!(project.technologies, vec!["Rust"]);
        assert_eq!(project.rank, Some(3));
        assert!(project.category.is_none());
    }

    #[test]
    fn payload_writes_canonical_keys_only() {
        let payload = ProjectPayload {
            title: "t".to_string(),
            description: "d".to_string(),
            image: "i".to_string(),
            live_url: "l".to_string(),
            technologies: vec!["Rust".to_string()],
            github: "g".to_string(),
            category: "Projects".to_string(),
            features: vec![],
            links: vec![],
            rank: None,
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["liveUrl"], "l");
        assert_eq!(json["technologies"][0], "Rust");
        assert!(json.get("tech").is_none());
        assert!(json.get("githubUrl").is_none());
        assert!(json.get("rank").is_none());
    }
}
