// src/modules/learning_planner/application/domain/entities.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Youtube,
    Document,
    Notes,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LearningResource {
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Phase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Topic {
    pub fn completed_phases(&self) -> usize {
        self.phases.iter().filter(|p| p.completed).count()
    }

    /// Completed share of phases as a whole percentage; 0 without phases.
    pub fn progress(&self) -> u32 {
        if self.phases.is_empty() {
            return 0;
        }
        let ratio = self.completed_phases() as f64 / self.phases.len() as f64;
        (ratio * 100.0).round() as u32
    }

    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == phase_id)
    }
}
