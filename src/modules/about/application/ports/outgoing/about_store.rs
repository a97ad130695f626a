// src/modules/about/application/ports/outgoing/about_store.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::about::application::domain::entities::AboutInfo;
use crate::shared::http::RequestError;

/// Body written to the singleton about record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub experience: String,
}

#[async_trait]
pub trait AboutStore: Send + Sync {
    async fn get(&self) -> Result<Option<AboutInfo>, RequestError>;

    async fn create(&self, payload: &AboutPayload) -> Result<(), RequestError>;

    async fn update(&self, payload: &AboutPayload) -> Result<(), RequestError>;
}
