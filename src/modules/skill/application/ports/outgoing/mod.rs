mod skill_store;

pub use skill_store::{SkillPayload, SkillStore};
