// src/shared/section/error.rs
use actix_web::http::StatusCode;

use crate::shared::http::RequestError;
use crate::shared::section::{Notification, SessionError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("Edit mode is not enabled")]
    EditModeDisabled,

    #[error("No active edit session")]
    NoActiveSession,

    #[error("{0} not found")]
    RecordNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Unsupported(String),

    #[error(transparent)]
    Remote(#[from] RequestError),
}

impl From<SessionError> for SectionError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotOpen => SectionError::NoActiveSession,
            SessionError::NotEditing => SectionError::Unsupported(err.to_string()),
        }
    }
}

impl SectionError {
    pub fn status(&self) -> StatusCode {
        match self {
            SectionError::EditModeDisabled => StatusCode::FORBIDDEN,
            SectionError::NoActiveSession => StatusCode::CONFLICT,
            SectionError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            SectionError::Validation(_) => StatusCode::BAD_REQUEST,
            SectionError::Unsupported(_) => StatusCode::METHOD_NOT_ALLOWED,
            SectionError::Remote(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SectionError::EditModeDisabled => "EDIT_MODE_DISABLED",
            SectionError::NoActiveSession => "NO_ACTIVE_SESSION",
            SectionError::RecordNotFound(_) => "RECORD_NOT_FOUND",
            SectionError::Validation(_) => "VALIDATION_ERROR",
            SectionError::Unsupported(_) => "UNSUPPORTED_OPERATION",
            SectionError::Remote(_) => "REMOTE_ERROR",
        }
    }

    pub fn notification(&self) -> Notification {
        Notification::error(self.to_string())
    }
}
