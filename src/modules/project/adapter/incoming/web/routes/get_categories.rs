use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::shared::context::ProjectCategories;
use crate::AppState;

/// List project categories
#[utoipa::path(
    get,
    path = "/api/project-categories",
    tag = "projects",
    responses(
        (status = 200, description = "Category tabs and the active one", body = inline(SuccessResponse<ProjectCategories>)),
    )
)]
#[get("/api/project-categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.page.context().categories())
}
