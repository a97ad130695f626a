use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::learning_planner::application::domain::entities::Phase;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Flip a phase between done and not done
///
/// Open to every visitor; edit mode is not required.
#[utoipa::path(
    post,
    path = "/api/learning-planner/topics/{topic_id}/phases/{phase_id}/toggle",
    tag = "learning_planner",
    params(
        ("topic_id" = String, Path, description = "Topic id"),
        ("phase_id" = String, Path, description = "Phase id"),
    ),
    responses(
        (status = 200, description = "Phase after the toggle", body = inline(SuccessResponse<Phase>)),
        (status = 404, description = "Unknown topic or phase", body = ErrorResponse),
    )
)]
#[post("/api/learning-planner/topics/{topic_id}/phases/{phase_id}/toggle")]
pub async fn toggle_phase_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (topic_id, phase_id) = path.into_inner();
    match data.page.toggle_phase(&topic_id, &phase_id).await {
        Ok(phase) => ApiResponse::success(phase),
        Err(e) => ApiResponse::section_error(&e),
    }
}
