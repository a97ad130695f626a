// src/modules/learning_planner/application/ports/outgoing/planner_store.rs
use async_trait::async_trait;

use crate::modules::learning_planner::application::domain::entities::{
    LearningResource, Phase, Topic,
};
use crate::shared::http::RequestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPayload {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhasePayload {
    pub title: String,
    pub description: String,
    /// Resources with an empty id get one assigned by the store.
    pub resources: Vec<LearningResource>,
}

/// Client-local topic → phase → resource tree.
#[async_trait]
pub trait PlannerStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Topic>, RequestError>;

    async fn create_topic(&self, payload: &TopicPayload) -> Result<Topic, RequestError>;

    async fn update_topic(&self, id: &str, payload: &TopicPayload) -> Result<Topic, RequestError>;

    async fn delete_topic(&self, id: &str) -> Result<(), RequestError>;

    /// New phases start incomplete.
    async fn create_phase(
        &self,
        topic_id: &str,
        payload: &PhasePayload,
    ) -> Result<Phase, RequestError>;

    /// Keeps the phase's `completed` flag.
    async fn update_phase(
        &self,
        topic_id: &str,
        phase_id: &str,
        payload: &PhasePayload,
    ) -> Result<Phase, RequestError>;

    async fn delete_phase(&self, topic_id: &str, phase_id: &str) -> Result<(), RequestError>;

    async fn toggle_phase(&self, topic_id: &str, phase_id: &str) -> Result<Phase, RequestError>;
}
