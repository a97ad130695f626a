pub mod domain;
pub mod ports;
mod skill_section;
mod skill_view;

pub use skill_section::{SkillDraft, SkillSection};
pub use skill_view::{IconView, SkillGroupView, SkillView};
