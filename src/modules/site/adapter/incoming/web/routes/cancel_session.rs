use actix_web::{delete, web, Responder};

use crate::modules::site::application::SectionName;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Close a modal, discarding its draft
#[utoipa::path(
    delete,
    path = "/api/sessions/{section}",
    tag = "sessions",
    params(("section" = SectionName, Path, description = "Section whose modal is closed")),
    responses((status = 204, description = "Closed"))
)]
#[delete("/api/sessions/{section}")]
pub async fn cancel_session_handler(
    path: web::Path<SectionName>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.page.cancel(path.into_inner()).await;
    ApiResponse::no_content()
}
