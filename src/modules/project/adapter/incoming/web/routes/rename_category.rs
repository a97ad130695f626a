use actix_web::{put, web, Responder};
use tracing::warn;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::adapter::incoming::web::routes::CategoryNameRequest;
use crate::shared::api::ApiResponse;
use crate::shared::context::ProjectCategories;
use crate::AppState;

/// Rename a project category
///
/// Only the tab label changes. Projects stored under the old name keep it
/// and stop appearing under any tab until they are edited.
#[utoipa::path(
    put,
    path = "/api/project-categories/{index}",
    tag = "projects",
    params(("index" = usize, Path, description = "Position of the category")),
    request_body = CategoryNameRequest,
    responses(
        (status = 200, description = "Category renamed", body = inline(SuccessResponse<ProjectCategories>)),
        (status = 404, description = "No category at that position", body = ErrorResponse),
    )
)]
#[put("/api/project-categories/{index:\\d+}")]
pub async fn rename_category_handler(
    path: web::Path<usize>,
    req: web::Json<CategoryNameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let index = path.into_inner();

    match data
        .page
        .context()
        .update_categories(|c| c.rename(index, &req.name))
    {
        Ok((old, categories)) => {
            if old != req.name.trim() {
                warn!(
                    "Category '{}' renamed; projects still tagged '{}' are not reassigned",
                    old, old
                );
            }
            ApiResponse::success(categories)
        }
        Err(e) => ApiResponse::category_error(&e),
    }
}
