// src/modules/coding_profile/adapter/outgoing/coding_profile_store_http.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::modules::coding_profile::application::domain::entities::{
    CodingProfile, Platform, ProfileStats,
};
use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfilePayload, CodingProfileStore,
};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodingProfileRecord {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    platform: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    profile_url: String,
    #[serde(default)]
    icon_url: Option<String>,
    #[serde(default)]
    stats: ProfileStats,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl CodingProfileRecord {
    fn into_domain(self) -> Option<CodingProfile> {
        let platform = match self.platform.parse::<Platform>() {
            Ok(p) => p,
            Err(e) => {
                warn!("Dropping coding profile '{}': {}", self.username, e);
                return None;
            }
        };

        Some(CodingProfile {
            id: self.id,
            platform,
            username: self.username,
            profile_url: self.profile_url,
            icon_url: self.icon_url,
            stats: self.stats,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn path(platform: Platform) -> String {
    format!("/coding-profiles/{}", platform.name())
}

#[derive(Clone)]
pub struct CodingProfileStoreHttp {
    client: RestClient,
}

impl CodingProfileStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodingProfileStore for CodingProfileStoreHttp {
    async fn get_all(&self) -> Result<Vec<CodingProfile>, RequestError> {
        let envelope: ApiEnvelope<Vec<CodingProfileRecord>> =
            self.client.get("/coding-profiles").await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .filter_map(CodingProfileRecord::into_domain)
            .collect())
    }

    async fn get(&self, platform: Platform) -> Result<CodingProfile, RequestError> {
        let envelope: ApiEnvelope<CodingProfileRecord> = self.client.get(&path(platform)).await?;
        envelope
            .data
            .and_then(CodingProfileRecord::into_domain)
            .ok_or_else(|| RequestError::Decode(format!("{} profile missing", platform)))
    }

    async fn create(&self, payload: &CodingProfilePayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> =
            self.client.post("/coding-profiles", Some(payload)).await?;
        Ok(())
    }

    async fn update(
        &self,
        platform: Platform,
        payload: &CodingProfilePayload,
    ) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> =
            self.client.put(&path(platform), payload).await?;
        Ok(())
    }

    async fn delete(&self, platform: Platform) -> Result<(), RequestError> {
        self.client.delete(&path(platform)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_stats_default_to_zero() {
        let record: CodingProfileRecord = serde_json::from_str(
            r#"{"platform":"CodeChef","username":"ada","profileUrl":"https://codechef.com/users/ada"}"#,
        )
        .unwrap();

        let profile = record.into_domain().unwrap();

        assert_eq!(profile.stats, ProfileStats::default());
        assert_eq!(profile.logo(), Platform::CodeChef.default_logo());
    }

    #[test]
    fn partial_stats_keep_given_values() {
        let record: CodingProfileRecord = serde_json::from_str(
            r#"{"platform":"LeetCode","username":"ada","profileUrl":"u","stats":{"solved":420}}"#,
        )
        .unwrap();

        assert_eq!(record.into_domain().unwrap().stats.solved, 420);
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = CodingProfilePayload {
            platform: Platform::HackerRank,
            username: "ada".to_string(),
            profile_url: "https://hackerrank.com/ada".to_string(),
            icon_url: None,
            stats: ProfileStats::default(),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["platform"], "HackerRank");
        assert_eq!(json["profileUrl"], "https://hackerrank.com/ada");
        assert!(json.get("iconUrl").is_none());
    }
}
