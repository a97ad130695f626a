pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;
use crate::config::SiteConfig;
use crate::modules::site::application::Page;
use crate::shared::api::custom_json_config;
use crate::shared::storage::FileLocalStore;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Page>,
}

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = SiteConfig::from_env()?;
    info!(
        "Portfolio API: {} (resume: {:?}, learning planner: {:?})",
        config.api_base_url, config.resume_storage, config.learning_planner_storage
    );

    let local_store = Arc::new(FileLocalStore::open(config.local_store_path.clone()));
    let page = Page::from_config(&config, local_store);
    page.load_all().await;

    let state = AppState {
        page: Arc::new(page),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(openapi_json);
    // Page
    cfg.service(crate::modules::site::adapter::incoming::web::routes::page_html_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::page_view_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::refresh_section_handler);
    // Admin
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_logout_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_verify_handler);
    // Edit sessions
    cfg.service(crate::modules::site::adapter::incoming::web::routes::open_session_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::edit_draft_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::submit_session_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::delete_record_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::cancel_session_handler);
    // Project categories
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::add_category_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::set_active_category_handler,
    );
    cfg.service(crate::modules::project::adapter::incoming::web::routes::rename_category_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_category_handler);
    // Learning planner
    cfg.service(
        crate::modules::learning_planner::adapter::incoming::web::routes::toggle_phase_handler,
    );
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::send_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
