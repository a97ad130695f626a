use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::site::adapter::incoming::web::html::render_page;
use crate::modules::site::application::UiState;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Rendered page
#[utoipa::path(
    get,
    path = "/",
    tag = "page",
    params(UiState),
    responses((status = 200, description = "HTML document", content_type = "text/html"))
)]
#[get("/")]
pub async fn page_html_handler(
    ui: web::Query<UiState>,
    data: web::Data<AppState>,
) -> impl Responder {
    let view = data.page.view(&ui).await;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&view))
}

/// Page view model
///
/// Everything the HTML page shows, plus the open edit sessions.
#[utoipa::path(
    get,
    path = "/api/page",
    tag = "page",
    params(UiState),
    responses((status = 200, description = "Page view model"))
)]
#[get("/api/page")]
pub async fn page_view_handler(
    ui: web::Query<UiState>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.page.view(&ui).await)
}
