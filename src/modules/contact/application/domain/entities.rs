// src/modules/contact/application/domain/entities.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_STATUS: &str = "new";

/// A visitor message as the owner reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Free text; the API decides which values it accepts.
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
