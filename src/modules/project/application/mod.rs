pub mod domain;
pub mod ports;
mod project_section;
mod project_view;

pub use project_section::{ProjectDraft, ProjectSection};
pub use project_view::{ProjectCardView, ProjectTabView, ProjectsView};
