use actix_web::{post, web, Responder};

use crate::modules::site::application::{SectionName, UiState};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Refetch one section
#[utoipa::path(
    post,
    path = "/api/sections/{section}/refresh",
    tag = "page",
    params(("section" = SectionName, Path, description = "Section to refetch")),
    responses((status = 200, description = "Page view model after the refetch"))
)]
#[post("/api/sections/{section}/refresh")]
pub async fn refresh_section_handler(
    path: web::Path<SectionName>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.page.refresh(path.into_inner()).await;
    ApiResponse::success(data.page.view(&UiState::default()).await)
}
