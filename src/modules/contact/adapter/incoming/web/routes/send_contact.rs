use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::{ContactFormDraft, ContactFormError};
use crate::shared::api::{ActionOutcome, ApiResponse};
use crate::AppState;

/// Send a message to the site owner
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactFormDraft,
    responses(
        (status = 200, description = "Message sent", body = inline(SuccessResponse<ActionOutcome>)),
        (status = 400, description = "Missing field or malformed email", body = ErrorResponse),
        (status = 502, description = "Portfolio API refused the message", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_handler(
    req: web::Json<ContactFormDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.page.send_contact(req.into_inner()).await {
        Ok(notification) => ApiResponse::notify(notification),

        Err(e @ ContactFormError::Validation(_)) => {
            ApiResponse::rejected(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.notification())
        }

        Err(e @ ContactFormError::Remote(_)) => {
            ApiResponse::rejected(StatusCode::BAD_GATEWAY, "REMOTE_ERROR", e.notification())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fake_backend::FakeBackend;

    fn message() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Loved the planner."
        })
    }

    #[actix_web::test]
    async fn test_send_contact_success_clears_form() {
        let backend = FakeBackend::start().await;
        let state = TestAppStateBuilder::default()
            .with_api(backend.base_url())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(send_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(message())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["notification"]["title"], "Message Sent");
        assert_eq!(state.page.view(&Default::default()).await.contact_form, ContactFormDraft::default());
        assert_eq!(backend.records("contacts").len(), 1);
        assert_eq!(backend.records("contacts")[0]["subject"], "Hello");
    }

    #[actix_web::test]
    async fn test_send_contact_rejects_bad_email_and_keeps_values() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(send_contact_handler),
        )
        .await;

        let mut body = message();
        body["email"] = json!("not-an-email");
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["notification"]["description"],
            "Please enter a valid email address"
        );
        assert_eq!(
            state.page.view(&Default::default()).await.contact_form.email,
            "not-an-email"
        );
    }

    #[actix_web::test]
    async fn test_send_contact_unreachable_api_is_bad_gateway() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(send_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(message())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REMOTE_ERROR");
        assert_eq!(body["error"]["notification"]["title"], "Error");
    }
}
