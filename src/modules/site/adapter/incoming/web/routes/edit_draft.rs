use actix_web::{put, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::site::application::{DraftPayload, UiState};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the draft of an open modal
#[utoipa::path(
    put,
    path = "/api/sessions/draft",
    tag = "sessions",
    request_body = DraftPayload,
    responses(
        (status = 200, description = "Open sessions with their drafts"),
        (status = 409, description = "No session open for the section", body = ErrorResponse),
    )
)]
#[put("/api/sessions/draft")]
pub async fn edit_draft_handler(
    req: web::Json<DraftPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.edit_draft(req.into_inner()).await {
        Ok(()) => ApiResponse::success(data.page.view(&UiState::default()).await.sessions),
        Err(e) => ApiResponse::section_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::site::application::SessionTarget;
    use crate::shared::http::AUTH_TOKEN_KEY;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_draft_without_open_session_conflicts() {
        let state = TestAppStateBuilder::default()
            .with_local_entry(AUTH_TOKEN_KEY, "test-token")
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(edit_draft_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/sessions/draft")
            .set_json(json!({"section": "hero", "url": "https://cv.example/me.pdf"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NO_ACTIVE_SESSION");
    }

    #[actix_web::test]
    async fn test_draft_replaces_open_session_values() {
        let state = TestAppStateBuilder::default()
            .with_local_entry(AUTH_TOKEN_KEY, "test-token")
            .build();
        state.page.open(SessionTarget::Hero).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(edit_draft_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/sessions/draft")
            .set_json(json!({"section": "hero", "url": "https://cv.example/me.pdf"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["hero"]["draft"]["url"], "https://cv.example/me.pdf");
    }
}
