use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::about::application::AboutDraft;
use crate::modules::admin::adapter::incoming::web::routes::{LoginRequest, VerifyResponse};
use crate::modules::coding_profile::application::domain::entities::{Platform, ProfileStats};
use crate::modules::coding_profile::application::CodingProfileDraft;
use crate::modules::contact::application::{ContactFormDraft, ContactStatusDraft};
use crate::modules::hero::application::ResumeLinkDraft;
use crate::modules::learning_planner::application::domain::entities::{
    LearningResource, Phase, ResourceType,
};
use crate::modules::learning_planner::application::{PhaseDraft, PlannerDraft, TopicDraft};
use crate::modules::project::adapter::incoming::web::routes::CategoryNameRequest;
use crate::modules::project::application::domain::entities::ProjectLink;
use crate::modules::project::application::ProjectDraft;
use crate::modules::resume::application::domain::entities::ResumeKind;
use crate::modules::resume::application::{
    CertificationDraft, EducationDraft, ExperienceDraft, ResumeDraft,
};
use crate::modules::site::application::{DraftPayload, Readiness, SectionName, SessionTarget};
use crate::modules::skill::application::domain::entities::SkillCategory;
use crate::modules::skill::application::SkillDraft;
use crate::shared::api::{ActionOutcome, ApiError};
use crate::shared::context::ProjectCategories;
use crate::shared::section::{Notification, NotificationLevel};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Page actions of the single-page portfolio: edit mode, edit modals, project tabs, learning planner and contact form",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Page
        crate::modules::site::adapter::incoming::web::routes::get_page::page_html_handler,
        crate::modules::site::adapter::incoming::web::routes::get_page::page_view_handler,
        crate::modules::site::adapter::incoming::web::routes::refresh_section::refresh_section_handler,

        // Admin
        crate::modules::admin::adapter::incoming::web::routes::login::admin_login_handler,
        crate::modules::admin::adapter::incoming::web::routes::logout::admin_logout_handler,
        crate::modules::admin::adapter::incoming::web::routes::verify::admin_verify_handler,

        // Edit sessions
        crate::modules::site::adapter::incoming::web::routes::open_session::open_session_handler,
        crate::modules::site::adapter::incoming::web::routes::edit_draft::edit_draft_handler,
        crate::modules::site::adapter::incoming::web::routes::submit_session::submit_session_handler,
        crate::modules::site::adapter::incoming::web::routes::delete_record::delete_record_handler,
        crate::modules::site::adapter::incoming::web::routes::cancel_session::cancel_session_handler,

        // Project categories
        crate::modules::project::adapter::incoming::web::routes::get_categories::get_categories_handler,
        crate::modules::project::adapter::incoming::web::routes::add_category::add_category_handler,
        crate::modules::project::adapter::incoming::web::routes::rename_category::rename_category_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_category::delete_category_handler,
        crate::modules::project::adapter::incoming::web::routes::set_active_category::set_active_category_handler,

        // Learning planner
        crate::modules::learning_planner::adapter::incoming::web::routes::toggle_phase::toggle_phase_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::send_contact::send_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ActionOutcome>,
            ErrorResponse,
            ErrorDetail,
            ApiError,
            ActionOutcome,
            Notification,
            NotificationLevel,
            Readiness,

            // Admin
            LoginRequest,
            VerifyResponse,

            // Sessions
            SectionName,
            SessionTarget,
            DraftPayload,
            ResumeLinkDraft,
            AboutDraft,
            SkillDraft,
            SkillCategory,
            CodingProfileDraft,
            Platform,
            ProfileStats,
            ProjectDraft,
            ProjectLink,
            ResumeDraft,
            ResumeKind,
            ExperienceDraft,
            EducationDraft,
            CertificationDraft,
            PlannerDraft,
            TopicDraft,
            PhaseDraft,
            ContactStatusDraft,

            // Projects
            ProjectCategories,
            CategoryNameRequest,

            // Learning planner
            Phase,
            LearningResource,
            ResourceType,

            // Contact
            ContactFormDraft,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "page", description = "Rendered page and its view model"),
        (name = "admin", description = "Edit mode login, logout and token check"),
        (name = "sessions", description = "Edit modals: open, draft, save, delete, close"),
        (name = "projects", description = "Project category tabs"),
        (name = "learning_planner", description = "Learning planner actions open to visitors"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Token issued by the portfolio API quick login"))
                        .build(),
                ),
            )
        }
    }
}
