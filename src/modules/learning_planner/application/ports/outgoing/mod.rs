mod planner_store;

pub use planner_store::{PhasePayload, PlannerStore, TopicPayload};
