use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::site::application::SectionName;
use crate::shared::api::{ActionOutcome, ApiResponse};
use crate::AppState;

/// Save the open modal
///
/// Creates or updates the record behind the section's session, then refetches
/// the section. The modal stays open when validation or the remote call fails.
#[utoipa::path(
    post,
    path = "/api/sessions/{section}/submit",
    tag = "sessions",
    params(("section" = SectionName, Path, description = "Section whose modal is saved")),
    responses(
        (status = 200, description = "Saved", body = inline(SuccessResponse<ActionOutcome>)),
        (status = 400, description = "Draft failed validation", body = ErrorResponse),
        (status = 403, description = "Edit mode is not enabled", body = ErrorResponse),
        (status = 409, description = "No session open for the section", body = ErrorResponse),
        (status = 502, description = "Remote API refused the write", body = ErrorResponse),
    )
)]
#[post("/api/sessions/{section}/submit")]
pub async fn submit_session_handler(
    path: web::Path<SectionName>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.submit(path.into_inner()).await {
        Ok(notification) => ApiResponse::notify(notification),
        Err(e) => ApiResponse::section_error(&e),
    }
}
