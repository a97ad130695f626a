// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::context::CategoryError;
use crate::shared::section::{Notification, SectionError};

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Payload of a page action that only reports back to the visitor.
#[derive(Serialize, Clone, ToSchema)]
pub struct ActionOutcome {
    pub notification: Notification,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::error_with(status, code, message, None)
    }

    fn error_with(
        status: StatusCode,
        code: &str,
        message: &str,
        notification: Option<Notification>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
                notification,
            }),
        })
    }

    pub fn notify(notification: Notification) -> HttpResponse {
        ApiResponse::success(ActionOutcome { notification })
    }

    pub fn section_error(err: &SectionError) -> HttpResponse {
        Self::error_with(
            err.status(),
            err.code(),
            &err.to_string(),
            Some(err.notification()),
        )
    }

    /// Error response whose notification has a custom title, e.g. "Access Denied".
    pub fn rejected(status: StatusCode, code: &str, notification: Notification) -> HttpResponse {
        let message = notification.description.clone();
        Self::error_with(status, code, &message, Some(notification))
    }

    pub fn category_error(err: &CategoryError) -> HttpResponse {
        let (status, code) = match err {
            CategoryError::EditModeDisabled => (StatusCode::FORBIDDEN, "EDIT_MODE_DISABLED"),
            CategoryError::EmptyName => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            CategoryError::Duplicate(_) => (StatusCode::CONFLICT, "DUPLICATE_CATEGORY"),
            CategoryError::UnknownIndex(_) | CategoryError::UnknownName(_) => {
                (StatusCode::NOT_FOUND, "CATEGORY_NOT_FOUND")
            }
            CategoryError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LOCAL_STORAGE_ERROR")
            }
        };
        Self::error_with(
            status,
            code,
            &err.to_string(),
            Some(Notification::error(err.to_string())),
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
