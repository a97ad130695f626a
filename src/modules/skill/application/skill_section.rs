// src/modules/skill/application/skill_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};
use crate::modules::skill::application::ports::outgoing::{SkillPayload, SkillStore};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{SectionDescriptor, SectionResource, Validate, ValidationError};

pub const DEFAULT_PROFICIENCY: u32 = 50;
pub const DEFAULT_ICON: &str = "fa-solid fa-code";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillDraft {
    pub name: String,
    pub proficiency: u32,
    pub category: SkillCategory,
    pub icon: String,
}

impl Default for SkillDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            proficiency: DEFAULT_PROFICIENCY,
            category: SkillCategory::Frontend,
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl Validate for SkillDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "Please enter a skill name"));
        }
        if self.proficiency > 100 {
            return Err(ValidationError::new(
                "proficiency",
                "Proficiency must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

impl From<&SkillDraft> for SkillPayload {
    fn from(draft: &SkillDraft) -> Self {
        let icon = draft.icon.trim();
        SkillPayload {
            name: draft.name.trim().to_string(),
            proficiency: draft.proficiency,
            category: draft.category,
            icon: if icon.is_empty() { DEFAULT_ICON } else { icon }.to_string(),
        }
    }
}

pub struct SkillSection {
    store: Arc<dyn SkillStore>,
}

impl SkillSection {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for SkillSection {
    type Data = Vec<Skill>;
    type Key = String;
    type Draft = SkillDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "skills",
            label: "Skill",
            can_create: true,
            can_delete: true,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Vec<Skill>, RequestError> {
        self.store.get_all().await
    }

    async fn create(&self, draft: &SkillDraft) -> Result<(), RequestError> {
        self.store.create(&SkillPayload::from(draft)).await
    }

    async fn update(&self, id: &String, draft: &SkillDraft) -> Result<(), RequestError> {
        self.store.update(id, &SkillPayload::from(draft)).await
    }

    async fn delete(&self, id: &String) -> Result<(), RequestError> {
        self.store.delete(id).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> SkillDraft {
        SkillDraft::default()
    }

    fn draft_for(&self, data: &Vec<Skill>, id: &String) -> Option<SkillDraft> {
        data.iter().find(|s| &s.id == id).map(|s| SkillDraft {
            name: s.name.clone(),
            proficiency: s.proficiency,
            category: s.category,
            icon: if s.icon.is_empty() {
                DEFAULT_ICON.to_string()
            } else {
                s.icon.clone()
            },
        })
    }
}
