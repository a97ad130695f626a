pub mod domain;
pub mod ports;
mod planner_section;
mod planner_view;

pub use planner_section::{PhaseDraft, PlannerDraft, PlannerKey, PlannerSection, TopicDraft};
pub use planner_view::{PlannerView, TopicView};
