// src/modules/site/application/page.rs
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::config::SiteConfig;
use crate::modules::about::adapter::outgoing::AboutStoreHttp;
use crate::modules::about::application::ports::outgoing::AboutStore;
use crate::modules::about::application::{AboutSection, AboutView};
use crate::modules::admin::adapter::outgoing::AuthGatewayHttp;
use crate::modules::admin::application::ports::outgoing::AuthGateway;
use crate::modules::admin::application::{AdminGate, AdminGateError};
use crate::modules::coding_profile::adapter::outgoing::CodingProfileStoreHttp;
use crate::modules::coding_profile::application::ports::outgoing::CodingProfileStore;
use crate::modules::coding_profile::application::{CodingProfileSection, CodingProfileView};
use crate::modules::contact::adapter::outgoing::ContactStoreHttp;
use crate::modules::contact::application::ports::outgoing::ContactStore;
use crate::modules::contact::application::{
    ContactForm, ContactFormDraft, ContactFormError, InboxSection,
};
use crate::modules::hero::adapter::outgoing::PortfolioStoreHttp;
use crate::modules::hero::application::ports::outgoing::PortfolioStore;
use crate::modules::hero::application::{HeroSection, HeroView};
use crate::modules::learning_planner::adapter::outgoing::PlannerStoreLocal;
use crate::modules::learning_planner::application::domain::entities::Phase;
use crate::modules::learning_planner::application::ports::outgoing::PlannerStore;
use crate::modules::learning_planner::application::{
    PlannerDraft, PlannerKey, PlannerSection, PlannerView, TopicDraft,
};
use crate::modules::project::adapter::outgoing::ProjectStoreHttp;
use crate::modules::project::application::ports::outgoing::ProjectStore;
use crate::modules::project::application::{ProjectSection, ProjectsView};
use crate::modules::resume::adapter::outgoing::ResumeStoreLocal;
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::modules::resume::application::{ResumeDraft, ResumeKey, ResumeSection, ResumeView};
use crate::modules::site::application::{
    DraftPayload, PageSessions, PageView, SectionName, SessionTarget, UiState,
};
use crate::modules::skill::adapter::outgoing::SkillStoreHttp;
use crate::modules::skill::application::ports::outgoing::SkillStore;
use crate::modules::skill::application::{SkillGroupView, SkillSection};
use crate::shared::context::SiteContext;
use crate::shared::http::{RequestError, RestClient};
use crate::shared::section::{Notification, Section, SectionError};
use crate::shared::storage::LocalStore;

const READY_PROBE_KEY: &str = "readinessProbe";

/// Store ports behind each section.
pub struct PageStores {
    pub auth: Arc<dyn AuthGateway>,
    pub portfolio: Arc<dyn PortfolioStore>,
    pub about: Arc<dyn AboutStore>,
    pub skills: Arc<dyn SkillStore>,
    pub coding_profiles: Arc<dyn CodingProfileStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub resume: Arc<dyn ResumeStore>,
    pub planner: Arc<dyn PlannerStore>,
    pub contacts: Arc<dyn ContactStore>,
}

impl PageStores {
    /// Remote stores over `client`; resume and planner stay client-local.
    pub fn remote(
        client: &RestClient,
        config: &SiteConfig,
        local_store: Arc<dyn LocalStore>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthGatewayHttp::new(client.clone())),
            portfolio: Arc::new(PortfolioStoreHttp::new(client.clone())),
            about: Arc::new(AboutStoreHttp::new(client.clone())),
            skills: Arc::new(SkillStoreHttp::new(client.clone())),
            coding_profiles: Arc::new(CodingProfileStoreHttp::new(client.clone())),
            projects: Arc::new(ProjectStoreHttp::new(client.clone())),
            resume: Arc::new(ResumeStoreLocal::open(
                config.resume_storage,
                local_store.clone(),
            )),
            planner: Arc::new(PlannerStoreLocal::open(
                config.learning_planner_storage,
                local_store,
            )),
            contacts: Arc::new(ContactStoreHttp::new(client.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Readiness {
    pub api: bool,
    pub local_store: bool,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.api && self.local_store
    }
}

/// The single-page site: one section controller per page section, the admin
/// gate and the public contact form, all sharing one `SiteContext`.
pub struct Page {
    context: SiteContext,
    api: RestClient,
    admin: AdminGate,
    contact_form: ContactForm,
    pub hero: Section<HeroSection>,
    pub about: Section<AboutSection>,
    pub skills: Section<SkillSection>,
    pub coding_profiles: Section<CodingProfileSection>,
    pub projects: Section<ProjectSection>,
    pub resume: Section<ResumeSection>,
    pub learning_planner: Section<PlannerSection>,
    pub inbox: Section<InboxSection>,
}

impl Page {
    pub fn new(context: SiteContext, api: RestClient, stores: PageStores) -> Self {
        Self {
            admin: AdminGate::new(stores.auth, context.clone()),
            contact_form: ContactForm::new(stores.contacts.clone()),
            hero: Section::new(HeroSection::new(stores.portfolio), context.clone()),
            about: Section::new(AboutSection::new(stores.about), context.clone()),
            skills: Section::new(SkillSection::new(stores.skills), context.clone()),
            coding_profiles: Section::new(
                CodingProfileSection::new(stores.coding_profiles),
                context.clone(),
            ),
            projects: Section::new(ProjectSection::new(stores.projects), context.clone()),
            resume: Section::new(ResumeSection::new(stores.resume), context.clone()),
            learning_planner: Section::new(PlannerSection::new(stores.planner), context.clone()),
            inbox: Section::new(InboxSection::new(stores.contacts), context.clone()),
            context,
            api,
        }
    }

    pub fn from_config(config: &SiteConfig, local_store: Arc<dyn LocalStore>) -> Self {
        let context = SiteContext::new(local_store.clone());
        let api = RestClient::new(config.api_base_url.clone(), local_store.clone());
        let stores = PageStores::remote(&api, config, local_store);
        Self::new(context, api, stores)
    }

    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    // ──────────────────────────────────────────────────────────
    // Loading
    // ──────────────────────────────────────────────────────────

    /// Fetches every section at once; each failure only empties its own section.
    pub async fn load_all(&self) {
        futures::join!(
            self.hero.load(),
            self.about.load(),
            self.skills.load(),
            self.coding_profiles.load(),
            self.projects.load(),
            self.resume.load(),
            self.learning_planner.load(),
            self.inbox.load(),
        );
        info!("Page sections loaded");
    }

    pub async fn refresh(&self, section: SectionName) {
        match section {
            SectionName::Hero => self.hero.refresh().await,
            SectionName::About => self.about.refresh().await,
            SectionName::Skills => self.skills.refresh().await,
            SectionName::CodingProfiles => self.coding_profiles.refresh().await,
            SectionName::Projects => self.projects.refresh().await,
            SectionName::Resume => self.resume.refresh().await,
            SectionName::LearningPlanner => self.learning_planner.refresh().await,
            SectionName::Contacts => self.inbox.refresh().await,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Admin
    // ──────────────────────────────────────────────────────────

    pub async fn login(&self, password: &str) -> Result<Notification, AdminGateError> {
        let notification = self.admin.login(password).await?;
        self.inbox.load().await;
        Ok(notification)
    }

    pub async fn logout(&self) -> Notification {
        let notification = self.admin.logout();
        futures::join!(
            self.hero.reset(),
            self.about.reset(),
            self.skills.reset(),
            self.coding_profiles.reset(),
            self.projects.reset(),
            self.resume.reset(),
            self.learning_planner.reset(),
            self.inbox.reset(),
        );
        notification
    }

    pub async fn verify(&self) -> Result<bool, RequestError> {
        self.admin.verify().await
    }

    // ──────────────────────────────────────────────────────────
    // Edit sessions
    // ──────────────────────────────────────────────────────────

    pub async fn open(&self, target: SessionTarget) -> Result<(), SectionError> {
        match target {
            SessionTarget::Hero => match self.hero.data().await {
                Some(_) => self.hero.open_existing(()).await,
                None => self.hero.open_new().await,
            },
            SessionTarget::About => match self.about.data().await {
                Some(_) => self.about.open_existing(()).await,
                None => self.about.open_new().await,
            },
            SessionTarget::Skills { id } => match id {
                Some(id) => self.skills.open_existing(id).await,
                None => self.skills.open_new().await,
            },
            SessionTarget::CodingProfiles { platform } => match platform {
                Some(platform) => self.coding_profiles.open_existing(platform).await,
                None => self.coding_profiles.open_new().await,
            },
            SessionTarget::Projects { id } => match id {
                Some(id) => self.projects.open_existing(id).await,
                None => self.projects.open_new().await,
            },
            SessionTarget::Resume { kind, id } => match id {
                Some(id) => self.resume.open_existing(ResumeKey { kind, id }).await,
                None => self.resume.open_new_with(ResumeDraft::blank(kind)).await,
            },
            SessionTarget::LearningPlanner {
                topic_id,
                phase_id,
                new_phase,
            } => match (topic_id, phase_id) {
                (Some(topic_id), Some(phase_id)) => {
                    self.learning_planner
                        .open_existing(PlannerKey::Phase { topic_id, phase_id })
                        .await
                }
                (Some(topic_id), None) if new_phase => {
                    self.learning_planner
                        .open_new_with(PlannerDraft::phase_for(topic_id))
                        .await
                }
                (Some(topic_id), None) => {
                    self.learning_planner
                        .open_existing(PlannerKey::Topic { topic_id })
                        .await
                }
                (None, _) => {
                    self.learning_planner
                        .open_new_with(PlannerDraft::Topic(TopicDraft::default()))
                        .await
                }
            },
            SessionTarget::Contacts { id } => self.inbox.open_existing(id).await,
        }
    }

    pub async fn edit_draft(&self, payload: DraftPayload) -> Result<(), SectionError> {
        match payload {
            DraftPayload::Hero(d) => self.hero.replace_draft(d).await,
            DraftPayload::About(d) => self.about.replace_draft(d).await,
            DraftPayload::Skills(d) => self.skills.replace_draft(d).await,
            DraftPayload::CodingProfiles(d) => self.coding_profiles.replace_draft(d).await,
            DraftPayload::Projects(d) => self.projects.replace_draft(d).await,
            DraftPayload::Resume(d) => self.resume.replace_draft(d).await,
            DraftPayload::LearningPlanner(d) => self.learning_planner.replace_draft(d).await,
            DraftPayload::Contacts(d) => self.inbox.replace_draft(d).await,
        }
    }

    pub async fn submit(&self, section: SectionName) -> Result<Notification, SectionError> {
        match section {
            SectionName::Hero => self.hero.submit().await,
            SectionName::About => self.about.submit().await,
            SectionName::Skills => self.skills.submit().await,
            SectionName::CodingProfiles => self.coding_profiles.submit().await,
            SectionName::Projects => self.projects.submit().await,
            SectionName::Resume => self.resume.submit().await,
            SectionName::LearningPlanner => self.learning_planner.submit().await,
            SectionName::Contacts => self.inbox.submit().await,
        }
    }

    pub async fn delete(&self, section: SectionName) -> Result<Notification, SectionError> {
        match section {
            SectionName::Hero => self.hero.delete().await,
            SectionName::About => self.about.delete().await,
            SectionName::Skills => self.skills.delete().await,
            SectionName::CodingProfiles => self.coding_profiles.delete().await,
            SectionName::Projects => self.projects.delete().await,
            SectionName::Resume => self.resume.delete().await,
            SectionName::LearningPlanner => self.learning_planner.delete().await,
            SectionName::Contacts => self.inbox.delete().await,
        }
    }

    pub async fn cancel(&self, section: SectionName) {
        match section {
            SectionName::Hero => self.hero.cancel().await,
            SectionName::About => self.about.cancel().await,
            SectionName::Skills => self.skills.cancel().await,
            SectionName::CodingProfiles => self.coding_profiles.cancel().await,
            SectionName::Projects => self.projects.cancel().await,
            SectionName::Resume => self.resume.cancel().await,
            SectionName::LearningPlanner => self.learning_planner.cancel().await,
            SectionName::Contacts => self.inbox.cancel().await,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Ungated actions
    // ──────────────────────────────────────────────────────────

    pub async fn toggle_phase(&self, topic_id: &str, phase_id: &str) -> Result<Phase, SectionError> {
        let phase = self
            .learning_planner
            .resource()
            .toggle_phase(topic_id, phase_id)
            .await
            .map_err(|e| {
                warn!("Failed to toggle phase {}/{}: {}", topic_id, phase_id, e);
                match e {
                    RequestError::NotFound(what) => SectionError::RecordNotFound(what),
                    other => SectionError::Remote(other),
                }
            })?;

        self.learning_planner.refresh().await;
        Ok(phase)
    }

    pub async fn send_contact(
        &self,
        draft: ContactFormDraft,
    ) -> Result<Notification, ContactFormError> {
        self.contact_form.send(draft).await
    }

    // ──────────────────────────────────────────────────────────
    // Rendering and health
    // ──────────────────────────────────────────────────────────

    pub async fn view(&self, ui: &UiState) -> PageView {
        let (hero, about, skills, coding_profiles, projects, resume, planner, inbox) = futures::join!(
            self.hero.snapshot(),
            self.about.snapshot(),
            self.skills.snapshot(),
            self.coding_profiles.snapshot(),
            self.projects.snapshot(),
            self.resume.snapshot(),
            self.learning_planner.snapshot(),
            self.inbox.snapshot(),
        );

        let loading = [
            (SectionName::Hero, hero.loading),
            (SectionName::About, about.loading),
            (SectionName::Skills, skills.loading),
            (SectionName::CodingProfiles, coding_profiles.loading),
            (SectionName::Projects, projects.loading),
            (SectionName::Resume, resume.loading),
            (SectionName::LearningPlanner, planner.loading),
            (SectionName::Contacts, inbox.loading),
        ]
        .into_iter()
        .filter(|(_, loading)| *loading)
        .map(|(name, _)| name)
        .collect();

        let edit_mode = self.context.is_edit_mode();

        PageView {
            edit_mode,
            hero: HeroView::build(&hero.data),
            about: AboutView::build(&about.data),
            skills: SkillGroupView::build_all(&skills.data),
            coding_profiles: CodingProfileView::build_all(&coding_profiles.data),
            projects: ProjectsView::build(&projects.data, &self.context.categories()),
            learning_planner: PlannerView::build(&planner.data, ui.expanded_topic.as_deref()),
            resume: ResumeView::build(&resume.data),
            contact_form: self.contact_form.draft().await,
            inbox: if edit_mode { inbox.data } else { Vec::new() },
            loading,
            sessions: PageSessions {
                hero: hero.session,
                about: about.session,
                skills: skills.session,
                coding_profiles: coding_profiles.session,
                projects: projects.session,
                resume: resume.session,
                learning_planner: planner.session,
                contacts: inbox.session,
            },
        }
    }

    /// The API answers at all, and local storage accepts a write.
    pub async fn ready(&self) -> Readiness {
        let api = match self.api.probe().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Portfolio API unreachable: {}", e);
                false
            }
        };

        let store = self.context.local_store();
        let local_store = match store
            .set(READY_PROBE_KEY, "ok")
            .and_then(|_| store.remove(READY_PROBE_KEY))
        {
            Ok(()) => true,
            Err(e) => {
                error!("Local storage is not writable: {}", e);
                false
            }
        };

        Readiness { api, local_store }
    }
}
