// src/modules/skill/application/domain/entities.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SkillCategory {
    Frontend,
    Backend,
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Tools & Technologies")]
    ToolsAndTechnologies,
    Database,
}

impl SkillCategory {
    /// Display order on the page.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::ProgrammingLanguages,
        SkillCategory::ToolsAndTechnologies,
        SkillCategory::Database,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::ToolsAndTechnologies => "Tools & Technologies",
            SkillCategory::Database => "Database",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| format!("unknown skill category '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub proficiency: u32,
    pub category: SkillCategory,
    pub icon: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Skill {
    /// Recency used for ordering: last update, else creation.
    pub fn touched_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}
