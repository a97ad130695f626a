use actix_web::{post, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::{ActionOutcome, ApiResponse};
use crate::AppState;

/// Leave edit mode
///
/// Removes the stored token, closes every open modal and drops owner-only data.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Edit mode disabled", body = inline(SuccessResponse<ActionOutcome>)),
    )
)]
#[post("/api/admin/logout")]
pub async fn admin_logout_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::notify(data.page.logout().await)
}
