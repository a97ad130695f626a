// src/modules/coding_profile/application/ports/outgoing/coding_profile_store.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::coding_profile::application::domain::entities::{
    CodingProfile, Platform, ProfileStats,
};
use crate::shared::http::RequestError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingProfilePayload {
    pub platform: Platform,
    pub username: String,
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub stats: ProfileStats,
}

#[async_trait]
pub trait CodingProfileStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CodingProfile>, RequestError>;

    async fn get(&self, platform: Platform) -> Result<CodingProfile, RequestError>;

    async fn create(&self, payload: &CodingProfilePayload) -> Result<(), RequestError>;

    async fn update(
        &self,
        platform: Platform,
        payload: &CodingProfilePayload,
    ) -> Result<(), RequestError>;

    async fn delete(&self, platform: Platform) -> Result<(), RequestError>;
}
