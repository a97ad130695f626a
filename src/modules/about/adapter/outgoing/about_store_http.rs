// src/modules/about/adapter/outgoing/about_store_http.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::about::application::domain::entities::AboutInfo;
use crate::modules::about::application::ports::outgoing::{AboutPayload, AboutStore};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

//
// ──────────────────────────────────────────────────────────
// Wire record
// ──────────────────────────────────────────────────────────
// An empty object means "no record yet".
//

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct AboutRecord {
    #[serde(rename = "_id")]
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
    experience: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl AboutRecord {
    fn into_domain(self) -> Option<AboutInfo> {
        let id = self.id?;
        Some(AboutInfo {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            experience: self.experience.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct AboutStoreHttp {
    client: RestClient,
}

impl AboutStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AboutStore for AboutStoreHttp {
    async fn get(&self) -> Result<Option<AboutInfo>, RequestError> {
        match self.client.get::<ApiEnvelope<AboutRecord>>("/about").await {
            Ok(envelope) => Ok(envelope.data.and_then(AboutRecord::into_domain)),
            Err(RequestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, payload: &AboutPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> = self.client.post("/about", Some(payload)).await?;
        Ok(())
    }

    async fn update(&self, payload: &AboutPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<serde_json::Value> = self.client.put("/about", payload).await?;
        Ok(())
    }
}
