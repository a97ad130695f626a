use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    api: &'static str,
    local_store: &'static str,
}

fn status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Portfolio API reachable
/// - Local storage writable
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let readiness = data.page.ready().await;

    let body = ReadinessResponse {
        status: status(readiness.is_ready()),
        api: status(readiness.api),
        local_store: status(readiness.local_store),
    };

    if readiness.is_ready() {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
