use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::site::application::SectionName;
use crate::shared::api::{ActionOutcome, ApiResponse};
use crate::AppState;

/// Delete the record being edited
#[utoipa::path(
    post,
    path = "/api/sessions/{section}/delete",
    tag = "sessions",
    params(("section" = SectionName, Path, description = "Section whose record is deleted")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<ActionOutcome>)),
        (status = 403, description = "Edit mode is not enabled", body = ErrorResponse),
        (status = 405, description = "Section does not delete, or modal holds a new record", body = ErrorResponse),
        (status = 409, description = "No session open for the section", body = ErrorResponse),
        (status = 502, description = "Remote API refused the delete", body = ErrorResponse),
    )
)]
#[post("/api/sessions/{section}/delete")]
pub async fn delete_record_handler(
    path: web::Path<SectionName>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.delete(path.into_inner()).await {
        Ok(notification) => ApiResponse::notify(notification),
        Err(e) => ApiResponse::section_error(&e),
    }
}
