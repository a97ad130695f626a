use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::context::ProjectCategories;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CategoryNameRequest {
    #[schema(example = "Research")]
    pub name: String,
}

/// Add a project category
#[utoipa::path(
    post,
    path = "/api/project-categories",
    tag = "projects",
    request_body = CategoryNameRequest,
    responses(
        (status = 201, description = "Category added", body = inline(SuccessResponse<ProjectCategories>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
        (status = 403, description = "Edit mode is off", body = ErrorResponse),
        (status = 409, description = "Name already used", body = ErrorResponse),
    )
)]
#[post("/api/project-categories")]
pub async fn add_category_handler(
    req: web::Json<CategoryNameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.context().update_categories(|c| c.add(&req.name)) {
        Ok(((), categories)) => ApiResponse::created(categories),
        Err(e) => ApiResponse::category_error(&e),
    }
}
