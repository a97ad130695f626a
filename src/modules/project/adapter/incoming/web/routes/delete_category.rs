use actix_web::{delete, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::context::ProjectCategories;
use crate::AppState;

/// Delete a project category
///
/// Deleting the active tab switches to the first remaining one.
#[utoipa::path(
    delete,
    path = "/api/project-categories/{index}",
    tag = "projects",
    params(("index" = usize, Path, description = "Position of the category")),
    responses(
        (status = 200, description = "Category deleted", body = inline(SuccessResponse<ProjectCategories>)),
        (status = 404, description = "No category at that position", body = ErrorResponse),
    )
)]
#[delete("/api/project-categories/{index:\\d+}")]
pub async fn delete_category_handler(
    path: web::Path<usize>,
    data: web::Data<AppState>,
) -> impl Responder {
    let index = path.into_inner();

    match data.page.context().update_categories(|c| c.remove(index)) {
        Ok((_, categories)) => ApiResponse::success(categories),
        Err(e) => ApiResponse::category_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::shared::http::AUTH_TOKEN_KEY;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_delete_active_category_moves_to_first() {
        let state = TestAppStateBuilder::default()
            .with_local_entry(AUTH_TOKEN_KEY, "test-token")
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(delete_category_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/project-categories/0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["names"], serde_json::json!(["Mini Projects"]));
        assert_eq!(body["data"]["active"], "Mini Projects");
    }
}
