// src/modules/project/application/project_view.rs
use std::cmp::Ordering;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{Project, ProjectLink};
use crate::shared::context::ProjectCategories;

const CARD_TECH_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    /// Technologies beyond the ones shown on the card.
    pub more_technologies: usize,
    pub all_technologies: Vec<String>,
    pub features: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub live_url: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectTabView {
    pub category: String,
    pub active: bool,
    pub projects: Vec<ProjectCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectsView {
    pub categories: Vec<String>,
    pub active: String,
    pub tabs: Vec<ProjectTabView>,
}

/// Rank descending (missing counts as 0), then newest first.
fn by_rank_then_recency(a: &&Project, b: &&Project) -> Ordering {
    b.rank
        .unwrap_or(0)
        .cmp(&a.rank.unwrap_or(0))
        .then_with(|| b.touched_at().cmp(&a.touched_at()))
}

impl ProjectCardView {
    fn from_project(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            technologies: p.technologies.iter().take(CARD_TECH_LIMIT).cloned().collect(),
            more_technologies: p.technologies.len().saturating_sub(CARD_TECH_LIMIT),
            all_technologies: p.technologies.clone(),
            features: p.features.clone(),
            links: p.links.clone(),
            live_url: p.live_url.clone(),
            github: p.github.clone(),
        }
    }
}

impl ProjectsView {
    pub fn build(projects: &[Project], categories: &ProjectCategories) -> Self {
        let first = categories.first();

        let tabs = categories
            .names
            .iter()
            .map(|category| {
                let mut members: Vec<&Project> = projects
                    .iter()
                    .filter(|p| p.category_or(first) == category)
                    .collect();
                members.sort_by(by_rank_then_recency);

                ProjectTabView {
                    category: category.clone(),
                    active: *category == categories.active,
                    projects: members.into_iter().map(ProjectCardView::from_project).collect(),
                }
            })
            .collect();

        Self {
            categories: categories.names.clone(),
            active: categories.active.clone(),
            tabs,
        }
    }
}
