// src/modules/site/application/page_view.rs
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::modules::about::application::{AboutDraft, AboutView};
use crate::modules::coding_profile::application::domain::entities::Platform;
use crate::modules::coding_profile::application::{CodingProfileDraft, CodingProfileView};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::{ContactFormDraft, ContactStatusDraft};
use crate::modules::hero::application::{HeroView, ResumeLinkDraft};
use crate::modules::learning_planner::application::{PlannerDraft, PlannerKey, PlannerView};
use crate::modules::project::application::{ProjectDraft, ProjectsView};
use crate::modules::resume::application::{ResumeDraft, ResumeKey, ResumeView};
use crate::modules::site::application::SectionName;
use crate::modules::skill::application::{SkillDraft, SkillGroupView};
use crate::shared::section::EditSession;

/// Presentation-only state carried by the request, never stored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UiState {
    /// Learning topic whose phases are shown.
    pub expanded_topic: Option<String>,
}

/// Every section's edit modal.
#[derive(Debug, Clone, Serialize)]
pub struct PageSessions {
    pub hero: EditSession<(), ResumeLinkDraft>,
    pub about: EditSession<(), AboutDraft>,
    pub skills: EditSession<String, SkillDraft>,
    pub coding_profiles: EditSession<Platform, CodingProfileDraft>,
    pub projects: EditSession<String, ProjectDraft>,
    pub resume: EditSession<ResumeKey, ResumeDraft>,
    pub learning_planner: EditSession<PlannerKey, PlannerDraft>,
    pub contacts: EditSession<String, ContactStatusDraft>,
}

impl PageSessions {
    pub fn open_sections(&self) -> Vec<SectionName> {
        [
            (SectionName::Hero, self.hero.is_open()),
            (SectionName::About, self.about.is_open()),
            (SectionName::Skills, self.skills.is_open()),
            (SectionName::CodingProfiles, self.coding_profiles.is_open()),
            (SectionName::Projects, self.projects.is_open()),
            (SectionName::Resume, self.resume.is_open()),
            (SectionName::LearningPlanner, self.learning_planner.is_open()),
            (SectionName::Contacts, self.contacts.is_open()),
        ]
        .into_iter()
        .filter(|(_, open)| *open)
        .map(|(name, _)| name)
        .collect()
    }
}

/// The whole page as rendered from the section caches.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub edit_mode: bool,
    pub hero: HeroView,
    pub about: AboutView,
    pub skills: Vec<SkillGroupView>,
    pub coding_profiles: Vec<CodingProfileView>,
    pub projects: ProjectsView,
    pub learning_planner: PlannerView,
    pub resume: ResumeView,
    pub contact_form: ContactFormDraft,
    /// Owner-only; always empty outside edit mode.
    pub inbox: Vec<ContactMessage>,
    /// Sections with a fetch in flight.
    pub loading: Vec<SectionName>,
    pub sessions: PageSessions,
}
