// src/modules/skill/application/ports/outgoing/skill_store.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};
use crate::shared::http::RequestError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPayload {
    pub name: String,
    pub proficiency: u32,
    pub category: SkillCategory,
    pub icon: String,
}

#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Skill>, RequestError>;

    async fn get(&self, id: &str) -> Result<Skill, RequestError>;

    async fn create(&self, payload: &SkillPayload) -> Result<(), RequestError>;

    async fn update(&self, id: &str, payload: &SkillPayload) -> Result<(), RequestError>;

    async fn delete(&self, id: &str) -> Result<(), RequestError>;
}
