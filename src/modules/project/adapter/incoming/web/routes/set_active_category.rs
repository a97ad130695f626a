use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::adapter::incoming::web::routes::CategoryNameRequest;
use crate::shared::api::ApiResponse;
use crate::shared::context::ProjectCategories;
use crate::AppState;

/// Switch the visible project tab
#[utoipa::path(
    put,
    path = "/api/project-categories/active",
    tag = "projects",
    request_body = CategoryNameRequest,
    responses(
        (status = 200, description = "Active tab changed", body = inline(SuccessResponse<ProjectCategories>)),
        (status = 404, description = "Unknown category", body = ErrorResponse),
    )
)]
#[put("/api/project-categories/active")]
pub async fn set_active_category_handler(
    req: web::Json<CategoryNameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.context().set_active_category(&req.name) {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => ApiResponse::category_error(&e),
    }
}
