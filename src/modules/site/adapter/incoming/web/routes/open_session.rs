use actix_web::{post, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::site::application::{SessionTarget, UiState};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Open an edit modal
///
/// Opens a section's session for a new record, or for an existing one when
/// the target names it. Requires edit mode.
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "sessions",
    request_body = SessionTarget,
    responses(
        (status = 200, description = "Open sessions with their drafts"),
        (status = 403, description = "Edit mode is not enabled", body = ErrorResponse),
        (status = 404, description = "Record not in the section cache", body = ErrorResponse),
    )
)]
#[post("/api/sessions")]
pub async fn open_session_handler(
    req: web::Json<SessionTarget>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.open(req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.page.view(&UiState::default()).await.sessions),
        Err(e) => ApiResponse::section_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::http::AUTH_TOKEN_KEY;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_open_requires_edit_mode() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(open_session_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(json!({"section": "skills"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EDIT_MODE_DISABLED");
    }

    #[actix_web::test]
    async fn test_open_new_skill_starts_from_blank_draft() {
        let state = TestAppStateBuilder::default()
            .with_local_entry(AUTH_TOKEN_KEY, "test-token")
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(open_session_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(json!({"section": "skills"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["skills"]["mode"], "creating");
        assert_eq!(body["data"]["skills"]["draft"]["name"], "");
        assert_eq!(body["data"]["projects"]["mode"], "closed");
    }

    #[actix_web::test]
    async fn test_open_unknown_record_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_local_entry(AUTH_TOKEN_KEY, "test-token")
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(open_session_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sessions")
            .set_json(json!({"section": "projects", "id": "missing"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
