// src/modules/skill/application/skill_view.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid url pattern"));

/// How a skill icon string is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IconView {
    /// Inline markup, inserted as is.
    Markup(String),
    Url(String),
    CssClass(String),
    None,
}

impl IconView {
    pub fn classify(icon: &str) -> Self {
        let icon = icon.trim();
        if icon.is_empty() {
            IconView::None
        } else if icon.starts_with('<') {
            IconView::Markup(icon.to_string())
        } else if HTTP_URL.is_match(icon) {
            IconView::Url(icon.to_string())
        } else {
            IconView::CssClass(icon.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub id: String,
    pub name: String,
    pub proficiency: u32,
    pub icon: IconView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroupView {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<SkillView>,
}

impl SkillGroupView {
    /// One group per category in display order, newest first within a group.
    pub fn build_all(skills: &[Skill]) -> Vec<SkillGroupView> {
        let mut sorted: Vec<&Skill> = skills.iter().collect();
        sorted.sort_by(|a, b| b.touched_at().cmp(&a.touched_at()));

        SkillCategory::ALL
            .iter()
            .map(|category| SkillGroupView {
                category: *category,
                label: category.label(),
                skills: sorted
                    .iter()
                    .filter(|s| s.category == *category)
                    .map(|s| SkillView {
                        id: s.id.clone(),
                        name: s.name.clone(),
                        proficiency: s.proficiency.min(100),
                        icon: IconView::classify(&s.icon),
                    })
                    .collect(),
            })
            .collect()
    }
}
