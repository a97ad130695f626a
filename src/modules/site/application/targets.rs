// src/modules/site/application/targets.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::about::application::AboutDraft;
use crate::modules::coding_profile::application::domain::entities::Platform;
use crate::modules::coding_profile::application::CodingProfileDraft;
use crate::modules::contact::application::ContactStatusDraft;
use crate::modules::hero::application::ResumeLinkDraft;
use crate::modules::learning_planner::application::PlannerDraft;
use crate::modules::project::application::ProjectDraft;
use crate::modules::resume::application::domain::entities::ResumeKind;
use crate::modules::resume::application::ResumeDraft;
use crate::modules::skill::application::SkillDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Hero,
    About,
    Skills,
    CodingProfiles,
    Projects,
    Resume,
    LearningPlanner,
    Contacts,
}

impl SectionName {
    pub const ALL: [SectionName; 8] = [
        SectionName::Hero,
        SectionName::About,
        SectionName::Skills,
        SectionName::CodingProfiles,
        SectionName::Projects,
        SectionName::Resume,
        SectionName::LearningPlanner,
        SectionName::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Hero => "hero",
            SectionName::About => "about",
            SectionName::Skills => "skills",
            SectionName::CodingProfiles => "coding_profiles",
            SectionName::Projects => "projects",
            SectionName::Resume => "resume",
            SectionName::LearningPlanner => "learning_planner",
            SectionName::Contacts => "contacts",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which record an edit modal opens on. A missing id opens a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SessionTarget {
    /// Singleton: edits the stored link, or creates it when there is none.
    Hero,
    /// Singleton: edits the stored record, or creates it when there is none.
    About,
    Skills {
        #[serde(default)]
        id: Option<String>,
    },
    CodingProfiles {
        #[serde(default)]
        platform: Option<Platform>,
    },
    Projects {
        #[serde(default)]
        id: Option<String>,
    },
    Resume {
        kind: ResumeKind,
        #[serde(default)]
        id: Option<String>,
    },
    /// No ids opens a new topic. `topic_id` alone edits that topic, or adds
    /// a phase to it with `new_phase`. Both ids edit a phase.
    LearningPlanner {
        #[serde(default)]
        topic_id: Option<String>,
        #[serde(default)]
        phase_id: Option<String>,
        #[serde(default)]
        new_phase: bool,
    },
    Contacts {
        id: String,
    },
}

impl SessionTarget {
    pub fn section(&self) -> SectionName {
        match self {
            SessionTarget::Hero => SectionName::Hero,
            SessionTarget::About => SectionName::About,
            SessionTarget::Skills { .. } => SectionName::Skills,
            SessionTarget::CodingProfiles { .. } => SectionName::CodingProfiles,
            SessionTarget::Projects { .. } => SectionName::Projects,
            SessionTarget::Resume { .. } => SectionName::Resume,
            SessionTarget::LearningPlanner { .. } => SectionName::LearningPlanner,
            SessionTarget::Contacts { .. } => SectionName::Contacts,
        }
    }
}

/// A full replacement draft for one section's open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum DraftPayload {
    Hero(ResumeLinkDraft),
    About(AboutDraft),
    Skills(SkillDraft),
    CodingProfiles(CodingProfileDraft),
    Projects(ProjectDraft),
    Resume(ResumeDraft),
    LearningPlanner(PlannerDraft),
    Contacts(ContactStatusDraft),
}

impl DraftPayload {
    pub fn section(&self) -> SectionName {
        match self {
            DraftPayload::Hero(_) => SectionName::Hero,
            DraftPayload::About(_) => SectionName::About,
            DraftPayload::Skills(_) => SectionName::Skills,
            DraftPayload::CodingProfiles(_) => SectionName::CodingProfiles,
            DraftPayload::Projects(_) => SectionName::Projects,
            DraftPayload::Resume(_) => SectionName::Resume,
            DraftPayload::LearningPlanner(_) => SectionName::LearningPlanner,
            DraftPayload::Contacts(_) => SectionName::Contacts,
        }
    }
}
