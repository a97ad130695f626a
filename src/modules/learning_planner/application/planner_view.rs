// src/modules/learning_planner/application/planner_view.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::learning_planner::application::domain::entities::{Phase, Topic};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopicView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub progress: u32,
    pub completed_phases: usize,
    pub total_phases: usize,
    /// "k / n phases completed"
    pub progress_label: String,
    pub expanded: bool,
    pub phases: Vec<Phase>,
}

impl TopicView {
    pub fn build(topic: &Topic, expanded: bool) -> Self {
        let completed = topic.completed_phases();
        let total = topic.phases.len();

        Self {
            id: topic.id.clone(),
            title: topic.title.clone(),
            description: topic.description.clone(),
            created_at: topic.created_at.clone(),
            progress: topic.progress(),
            completed_phases: completed,
            total_phases: total,
            progress_label: format!("{} / {} phases completed", completed, total),
            expanded,
            phases: topic.phases.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlannerView {
    pub topics: Vec<TopicView>,
}

impl PlannerView {
    /// At most one topic is expanded; an unknown id expands none.
    pub fn build(topics: &[Topic], expanded_topic: Option<&str>) -> Self {
        Self {
            topics: topics
                .iter()
                .map(|t| TopicView::build(t, expanded_topic == Some(t.id.as_str())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, done: usize, total: usize) -> Topic {
        Topic {
            id: id.to_string(),
            title: format!("Topic {}", id),
            description: String::new(),
            created_at: "2025-01-15".to_string(),
            phases: (0..total)
                .map(|i| Phase {
                    id: format!("{}-{}", id, i),
                    title: format!("Phase {}", i),
                    description: String::new(),
                    completed: i < done,
                    resources: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn progress_label_counts_phases() {
        let view = PlannerView::build(&[topic("1", 2, 4)], None);

        assert_eq!(view.topics[0].progress, 50);
        assert_eq!(view.topics[0].progress_label, "2 / 4 phases completed");
    }

    #[test]
    fn only_requested_topic_is_expanded() {
        let view = PlannerView::build(&[topic("1", 0, 1), topic("2", 0, 1)], Some("2"));

        assert!(!view.topics[0].expanded);
        assert!(view.topics[1].expanded);
    }
}
