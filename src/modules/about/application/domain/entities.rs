// src/modules/about/application/domain/entities.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TITLE: &str = "Full Stack Developer & Tech Enthusiast";
pub const DEFAULT_DESCRIPTION: &str = "Passionate about building innovative web solutions";
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop";
pub const DEFAULT_EXPERIENCE: &str = "2+ years";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AboutInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub experience: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
