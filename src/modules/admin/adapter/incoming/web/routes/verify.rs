use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::section::SectionError;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    pub valid: bool,
    pub edit_mode: bool,
}

/// Check the stored token
///
/// Asks the portfolio API whether the stored token is still accepted.
/// Edit mode is reported but never changed.
#[utoipa::path(
    post,
    path = "/api/admin/verify",
    tag = "admin",
    responses(
        (status = 200, description = "Verification result", body = inline(SuccessResponse<VerifyResponse>)),
        (status = 502, description = "Portfolio API unreachable", body = ErrorResponse),
    )
)]
#[post("/api/admin/verify")]
pub async fn admin_verify_handler(data: web::Data<AppState>) -> impl Responder {
    match data.page.verify().await {
        Ok(valid) => ApiResponse::success(VerifyResponse {
            valid,
            edit_mode: data.page.context().is_edit_mode(),
        }),
        Err(e) => {
            error!("Token verification failed: {}", e);
            ApiResponse::section_error(&SectionError::Remote(e))
        }
    }
}
