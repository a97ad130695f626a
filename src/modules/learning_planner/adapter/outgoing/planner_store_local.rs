// src/modules/learning_planner/adapter/outgoing/planner_store_local.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::learning_planner::application::domain::entities::{
    LearningResource, Phase, ResourceType, Topic,
};
use crate::modules::learning_planner::application::ports::outgoing::{
    PhasePayload, PlannerStore, TopicPayload,
};
use crate::shared::http::RequestError;
use crate::shared::storage::{LocalDocument, LocalPersistence, LocalStore};

/// Local storage key used when planner persistence is enabled.
pub const PLANNER_STORAGE_KEY: &str = "learningPlannerTopics";

pub struct PlannerStoreLocal {
    document: LocalDocument<Vec<Topic>>,
}

impl PlannerStoreLocal {
    pub fn open(persistence: LocalPersistence, local_store: Arc<dyn LocalStore>) -> Self {
        Self {
            document: LocalDocument::open(
                persistence,
                local_store,
                PLANNER_STORAGE_KEY,
                sample_topics(),
            ),
        }
    }

    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self {
            document: LocalDocument::ephemeral(topics),
        }
    }
}

fn topic_mut<'a>(topics: &'a mut [Topic], id: &str) -> Result<&'a mut Topic, RequestError> {
    topics
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| RequestError::NotFound("Topic".to_string()))
}

fn phase_mut<'a>(topic: &'a mut Topic, id: &str) -> Result<&'a mut Phase, RequestError> {
    topic
        .phases
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| RequestError::NotFound("Phase".to_string()))
}

fn with_ids(resources: &[LearningResource]) -> Vec<LearningResource> {
    resources
        .iter()
        .cloned()
        .map(|mut r| {
            if r.id.trim().is_empty() {
                r.id = Uuid::new_v4().to_string();
            }
            r
        })
        .collect()
}

#[async_trait]
impl PlannerStore for PlannerStoreLocal {
    async fn get_all(&self) -> Result<Vec<Topic>, RequestError> {
        Ok(self.document.snapshot())
    }

    async fn create_topic(&self, payload: &TopicPayload) -> Result<Topic, RequestError> {
        let topic = Topic {
            id: Uuid::new_v4().to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            created_at: Utc::now().format("%Y-%m-%d").to_string(),
            phases: vec![],
        };

        self.document.mutate(|topics| {
            topics.push(topic.clone());
            Ok(())
        })?;

        Ok(topic)
    }

    async fn update_topic(&self, id: &str, payload: &TopicPayload) -> Result<Topic, RequestError> {
        self.document.mutate(|topics| {
            let topic = topic_mut(topics, id)?;
            topic.title = payload.title.clone();
            topic.description = payload.description.clone();
            Ok(topic.clone())
        })
    }

    async fn delete_topic(&self, id: &str) -> Result<(), RequestError> {
        self.document.mutate(|topics| {
            let before = topics.len();
            topics.retain(|t| t.id != id);
            if topics.len() == before {
                return Err(RequestError::NotFound("Topic".to_string()));
            }
            Ok(())
        })
    }

    async fn create_phase(
        &self,
        topic_id: &str,
        payload: &PhasePayload,
    ) -> Result<Phase, RequestError> {
        let phase = Phase {
            id: Uuid::new_v4().to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            completed: false,
            resources: with_ids(&payload.resources),
        };

        self.document.mutate(|topics| {
            topic_mut(topics, topic_id)?.phases.push(phase.clone());
            Ok(())
        })?;

        Ok(phase)
    }

    async fn update_phase(
        &self,
        topic_id: &str,
        phase_id: &str,
        payload: &PhasePayload,
    ) -> Result<Phase, RequestError> {
        self.document.mutate(|topics| {
            let phase = phase_mut(topic_mut(topics, topic_id)?, phase_id)?;
            phase.title = payload.title.clone();
            phase.description = payload.description.clone();
            phase.resources = with_ids(&payload.resources);
            Ok(phase.clone())
        })
    }

    async fn delete_phase(&self, topic_id: &str, phase_id: &str) -> Result<(), RequestError> {
        self.document.mutate(|topics| {
            let topic = topic_mut(topics, topic_id)?;
            let before = topic.phases.len();
            topic.phases.retain(|p| p.id != phase_id);
            if topic.phases.len() == before {
                return Err(RequestError::NotFound("Phase".to_string()));
            }
            Ok(())
        })
    }

    async fn toggle_phase(&self, topic_id: &str, phase_id: &str) -> Result<Phase, RequestError> {
        self.document.mutate(|topics| {
            let phase = phase_mut(topic_mut(topics, topic_id)?, phase_id)?;
            phase.completed = !phase.completed;
            Ok(phase.clone())
        })
    }
}

fn resource(id: &str, label: &str, url: &str, resource_type: ResourceType) -> LearningResource {
    LearningResource {
        id: id.to_string(),
        label: label.to_string(),
        url: url.to_string(),
        resource_type,
    }
}

fn phase(
    id: &str,
    title: &str,
    description: &str,
    completed: bool,
    resources: Vec<LearningResource>,
) -> Phase {
    Phase {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        resources,
    }
}

/// Topics shown until the owner edits the planner.
pub(crate) fn sample_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: "1".to_string(),
            title: "React Advanced Patterns".to_string(),
            description: "Deep dive into advanced React patterns including compound components, render props, and hooks.".to_string(),
            created_at: "2025-01-15".to_string(),
            phases: vec![
                phase(
                    "1-1",
                    "Compound Components",
                    "Learn compound component pattern for flexible APIs",
                    true,
                    vec![
                        resource("r1", "Kent C. Dodds Blog", "https://kentcdodds.com", ResourceType::Document),
                        resource("r2", "YouTube Tutorial", "https://youtube.com", ResourceType::Youtube),
                    ],
                ),
                phase(
                    "1-2",
                    "Custom Hooks",
                    "Build reusable logic with custom hooks",
                    true,
                    vec![resource("r3", "React Docs", "https://react.dev", ResourceType::Document)],
                ),
                phase(
                    "1-3",
                    "Render Props & HOCs",
                    "Understand render props and higher-order components",
                    false,
                    vec![],
                ),
                phase(
                    "1-4",
                    "Performance Optimization",
                    "useMemo, useCallback, React.memo patterns",
                    false,
                    vec![resource("r4", "Performance Guide", "https://react.dev", ResourceType::Notes)],
                ),
            ],
        },
        Topic {
            id: "2".to_string(),
            title: "System Design".to_string(),
            description: "Learn system design fundamentals for scalable applications.".to_string(),
            created_at: "2025-02-01".to_string(),
            phases: vec![
                phase(
                    "2-1",
                    "Fundamentals",
                    "CAP theorem, load balancing, caching",
                    true,
                    vec![resource("r5", "System Design Primer", "https://github.com", ResourceType::Document)],
                ),
                phase(
                    "2-2",
                    "Database Design",
                    "SQL vs NoSQL, sharding, replication",
                    false,
                    vec![resource("r6", "DB Design Video", "https://youtube.com", ResourceType::Youtube)],
                ),
                phase(
                    "2-3",
                    "Microservices",
                    "Service decomposition and communication patterns",
                    false,
                    vec![],
                ),
            ],
        },
    ]
}
