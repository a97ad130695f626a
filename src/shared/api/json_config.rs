// src/shared/api/json_config.rs
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use tracing::debug;

use crate::shared::api::ApiResponse;
use crate::shared::section::Notification;

/// Drafts are small; anything larger is rejected before deserializing.
const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, req| {
            let message = err.to_string();
            debug!("Rejected JSON body for {}: {}", req.path(), message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::rejected(
                    StatusCode::BAD_REQUEST,
                    "INVALID_PAYLOAD",
                    Notification::error(message),
                ),
            )
            .into()
        })
}
