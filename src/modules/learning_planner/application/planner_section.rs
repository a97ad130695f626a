// src/modules/learning_planner/application/planner_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::learning_planner::application::domain::entities::{
    LearningResource, Phase, Topic,
};
use crate::modules::learning_planner::application::ports::outgoing::{
    PhasePayload, PlannerStore, TopicPayload,
};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, SectionDescriptor, SectionResource, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum PlannerKey {
    Topic { topic_id: String },
    Phase { topic_id: String, phase_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TopicDraft {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PhaseDraft {
    pub topic_id: String,
    pub title: String,
    pub description: String,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum PlannerDraft {
    Topic(TopicDraft),
    Phase(PhaseDraft),
}

impl PlannerDraft {
    pub fn phase_for(topic_id: impl Into<String>) -> Self {
        PlannerDraft::Phase(PhaseDraft {
            topic_id: topic_id.into(),
            ..Default::default()
        })
    }
}

impl Validate for PlannerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            PlannerDraft::Topic(d) => require_non_empty("title", &d.title),
            PlannerDraft::Phase(d) => {
                require_non_empty("topic_id", &d.topic_id)?;
                require_non_empty("title", &d.title)
            }
        }
    }
}

impl From<&TopicDraft> for TopicPayload {
    fn from(draft: &TopicDraft) -> Self {
        TopicPayload {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
        }
    }
}

impl From<&PhaseDraft> for PhasePayload {
    fn from(draft: &PhaseDraft) -> Self {
        PhasePayload {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            resources: draft
                .resources
                .iter()
                .filter(|r| !r.url.trim().is_empty())
                .map(|r| LearningResource {
                    id: r.id.clone(),
                    label: r.label.trim().to_string(),
                    url: r.url.trim().to_string(),
                    resource_type: r.resource_type,
                })
                .collect(),
        }
    }
}

fn mismatch() -> RequestError {
    RequestError::Status {
        status: 400,
        message: "Draft does not match the selected entry".to_string(),
    }
}

pub struct PlannerSection {
    store: Arc<dyn PlannerStore>,
}

impl PlannerSection {
    pub fn new(store: Arc<dyn PlannerStore>) -> Self {
        Self { store }
    }

    /// Flips a phase's completion; not part of any edit session.
    pub async fn toggle_phase(&self, topic_id: &str, phase_id: &str) -> Result<Phase, RequestError> {
        self.store.toggle_phase(topic_id, phase_id).await
    }
}

#[async_trait]
impl SectionResource for PlannerSection {
    type Data = Vec<Topic>;
    type Key = PlannerKey;
    type Draft = PlannerDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "learning_planner",
            label: "Topic",
            can_create: true,
            can_delete: true,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Vec<Topic>, RequestError> {
        self.store.get_all().await
    }

    async fn create(&self, draft: &PlannerDraft) -> Result<(), RequestError> {
        match draft {
            PlannerDraft::Topic(d) => self.store.create_topic(&d.into()).await.map(|_| ()),
            PlannerDraft::Phase(d) => self
                .store
                .create_phase(&d.topic_id, &d.into())
                .await
                .map(|_| ()),
        }
    }

    async fn update(&self, key: &PlannerKey, draft: &PlannerDraft) -> Result<(), RequestError> {
        match (key, draft) {
            (PlannerKey::Topic { topic_id }, PlannerDraft::Topic(d)) => self
                .store
                .update_topic(topic_id, &d.into())
                .await
                .map(|_| ()),
            (PlannerKey::Phase { topic_id, phase_id }, PlannerDraft::Phase(d)) => self
                .store
                .update_phase(topic_id, phase_id, &d.into())
                .await
                .map(|_| ()),
            _ => Err(mismatch()),
        }
    }

    async fn delete(&self, key: &PlannerKey) -> Result<(), RequestError> {
        match key {
            PlannerKey::Topic { topic_id } => self.store.delete_topic(topic_id).await,
            PlannerKey::Phase { topic_id, phase_id } => {
                self.store.delete_phase(topic_id, phase_id).await
            }
        }
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> PlannerDraft {
        PlannerDraft::Topic(TopicDraft::default())
    }

    fn draft_for(&self, data: &Vec<Topic>, key: &PlannerKey) -> Option<PlannerDraft> {
        match key {
            PlannerKey::Topic { topic_id } => {
                data.iter().find(|t| &t.id == topic_id).map(|t| {
                    PlannerDraft::Topic(TopicDraft {
                        title: t.title.clone(),
                        description: t.description.clone(),
                    })
                })
            }
            PlannerKey::Phase { topic_id, phase_id } => data
                .iter()
                .find(|t| &t.id == topic_id)
                .and_then(|t| t.phase(phase_id))
                .map(|p| {
                    PlannerDraft::Phase(PhaseDraft {
                        topic_id: topic_id.clone(),
                        title: p.title.clone(),
                        description: p.description.clone(),
                        resources: p.resources.clone(),
                    })
                }),
        }
    }

    fn check_conflicts(
        &self,
        data: &Vec<Topic>,
        key: Option<&PlannerKey>,
        draft: &PlannerDraft,
    ) -> Result<(), ValidationError> {
        match (key, draft) {
            (Some(PlannerKey::Topic { .. }), PlannerDraft::Phase(_))
            | (Some(PlannerKey::Phase { .. }), PlannerDraft::Topic(_)) => Err(
                ValidationError::new("level", "Draft does not match the selected entry"),
            ),
            (Some(PlannerKey::Phase { topic_id, .. }), PlannerDraft::Phase(d))
                if &d.topic_id != topic_id =>
            {
                Err(ValidationError::new(
                    "topic_id",
                    "Phases cannot move between topics",
                ))
            }
            (_, PlannerDraft::Phase(d)) if !data.iter().any(|t| t.id == d.topic_id) => {
                Err(ValidationError::new("topic_id", "Topic not found"))
            }
            _ => Ok(()),
        }
    }

    fn label_for(&self, draft: &PlannerDraft) -> &'static str {
        match draft {
            PlannerDraft::Topic(_) => "Topic",
            PlannerDraft::Phase(_) => "Phase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::learning_planner::adapter::outgoing::PlannerStoreLocal;
    use crate::shared::section::{Section, SectionError};
    use crate::shared::storage::InMemoryLocalStore;

    fn sample() -> Vec<Topic> {
        vec![Topic {
            id: "1".to_string(),
            title: "System Design".to_string(),
            description: String::new(),
            created_at: "2025-02-01".to_string(),
            phases: vec![Phase {
                id: "1-1".to_string(),
                title: "Fundamentals".to_string(),
                description: String::new(),
                completed: true,
                resources: vec![],
            }],
        }]
    }

    async fn section(edit_mode: bool) -> Section<PlannerSection> {
        let ctx = SiteContext::new(Arc::new(InMemoryLocalStore::default()));
        if edit_mode {
            ctx.grant_edit_mode("token").unwrap();
        }

        let store = PlannerStoreLocal::with_topics(sample());
        let section = Section::new(PlannerSection::new(Arc::new(store)), ctx);
        section.load().await;
        section
    }

    #[tokio::test]
    async fn phase_for_unknown_topic_is_rejected_locally() {
        let section = section(true).await;

        section
            .open_new_with(PlannerDraft::Phase(PhaseDraft {
                topic_id: "404".to_string(),
                title: "Orphan".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();

        let err = section.submit().await.unwrap_err();
        assert!(matches!(err, SectionError::Validation(e) if e.message == "Topic not found"));
    }

    #[tokio::test]
    async fn edited_phase_stays_completed() {
        let section = section(true).await;
        let key = PlannerKey::Phase {
            topic_id: "1".to_string(),
            phase_id: "1-1".to_string(),
        };

        section.open_existing(key).await.unwrap();
        section
            .replace_draft(PlannerDraft::Phase(PhaseDraft {
                topic_id: "1".to_string(),
                title: "Basics".to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        let note = section.submit().await.unwrap();

        assert_eq!(note.description, "Phase updated successfully");
        let phase = section.data().await[0].phases[0].clone();
        assert_eq!(phase.title, "Basics");
        assert!(phase.completed);
    }

    #[tokio::test]
    async fn toggle_works_outside_edit_mode() {
        let section = section(false).await;

        let phase = section.resource().toggle_phase("1", "1-1").await.unwrap();
        section.refresh().await;

        assert!(!phase.completed);
        assert_eq!(section.data().await[0].progress(), 0);
    }

    #[tokio::test]
    async fn deleting_topic_uses_topic_label() {
        let section = section(true).await;

        section
            .open_existing(PlannerKey::Topic {
                topic_id: "1".to_string(),
            })
            .await
            .unwrap();
        let note = section.delete().await.unwrap();

        assert_eq!(note.description, "Topic deleted successfully");
        assert!(section.data().await.is_empty());
    }

    #[test]
    fn resources_without_url_are_dropped() {
        let draft = PhaseDraft {
            topic_id: "1".to_string(),
            title: "Basics".to_string(),
            description: String::new(),
            resources: vec![
                LearningResource {
                    label: "Empty".to_string(),
                    ..Default::default()
                },
                LearningResource {
                    label: " Docs ".to_string(),
                    url: "https://docs.rs".to_string(),
                    ..Default::default()
                },
            ],
        };

        let payload = PhasePayload::from(&draft);

        assert_eq!(payload.resources.len(), 1);
        assert_eq!(payload.resources[0].label, "Docs");
    }
}
