// src/modules/project/application/domain/entities.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub live_url: String,
    pub github: String,
    /// Client-side category name; not checked against the category list.
    pub category: Option<String>,
    pub features: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub rank: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn touched_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }

    /// Tab the project is listed under.
    pub fn category_or<'a>(&'a self, first: &'a str) -> &'a str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(first)
    }
}
