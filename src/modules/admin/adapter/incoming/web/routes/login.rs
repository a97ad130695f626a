use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::AdminGateError;
use crate::shared::api::{ActionOutcome, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "letmein")]
    pub password: String,
}

/// Enter edit mode
///
/// Exchanges the admin password for a bearer token and stores it locally.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Edit mode enabled", body = inline(SuccessResponse<ActionOutcome>)),
        (status = 400, description = "Empty password", body = ErrorResponse),
        (status = 401, description = "Password rejected", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.login(&req.password).await {
        Ok(notification) => ApiResponse::notify(notification),

        Err(e @ AdminGateError::EmptyPassword) => {
            ApiResponse::rejected(StatusCode::BAD_REQUEST, "EMPTY_PASSWORD", e.notification())
        }

        Err(e @ AdminGateError::Denied(_)) => {
            ApiResponse::rejected(StatusCode::UNAUTHORIZED, "ACCESS_DENIED", e.notification())
        }

        Err(e @ AdminGateError::Storage(_)) => {
            error!("Login succeeded but token could not be stored: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fake_backend::FakeBackend;

    #[actix_web::test]
    async fn test_login_success_enables_edit_mode() {
        let backend = FakeBackend::start().await;
        let state = TestAppStateBuilder::default()
            .with_api(backend.base_url())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(admin_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(LoginRequest {
                password: "letmein".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["notification"]["title"], "Access Granted");
        assert!(state.page.context().is_edit_mode());
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_denied() {
        let backend = FakeBackend::start().await;
        let state = TestAppStateBuilder::default()
            .with_api(backend.base_url())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(admin_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(LoginRequest {
                password: "guess".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCESS_DENIED");
        assert_eq!(body["error"]["notification"]["title"], "Access Denied");
        assert_eq!(body["error"]["notification"]["description"], "Invalid password");
        assert!(!state.page.context().is_edit_mode());
        assert!(state.page.context().auth_token().is_none());
    }

    #[actix_web::test]
    async fn test_login_empty_password_is_rejected_locally() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(admin_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(LoginRequest {
                password: "".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_PASSWORD");
    }
}
