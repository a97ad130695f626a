// src/modules/skill/adapter/outgoing/skill_store_http.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::modules::skill::application::domain::entities::{Skill, SkillCategory};
use crate::modules::skill::application::ports::outgoing::{SkillPayload, SkillStore};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    proficiency: u32,
    #[serde(default)]
    category: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl SkillRecord {
    /// Skills outside the known categories are dropped.
    fn into_domain(self) -> Option<Skill> {
        let category = match self.category.parse::<SkillCategory>() {
            Ok(c) => c,
            Err(e) => {
                warn!("Dropping skill '{}' ({}): {}", self.name, self.id, e);
                return None;
            }
        };

        Some(Skill {
            id: self.id,
            name: self.name,
            proficiency: self.proficiency,
            category,
            icon: self.icon.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Records that fail to decode are dropped, the rest of the list survives.
fn decode_each(records: Vec<Value>) -> Vec<Skill> {
    records
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<SkillRecord>(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping malformed skill record: {}", e);
                None
            }
        })
        .filter_map(SkillRecord::into_domain)
        .collect()
}

fn single(record: Option<SkillRecord>, id: &str) -> Result<Skill, RequestError> {
    record
        .and_then(SkillRecord::into_domain)
        .ok_or_else(|| RequestError::Decode(format!("skill '{}' missing from response", id)))
}

#[derive(Clone)]
pub struct SkillStoreHttp {
    client: RestClient,
}

impl SkillStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SkillStore for SkillStoreHttp {
    async fn get_all(&self) -> Result<Vec<Skill>, RequestError> {
        let envelope: ApiEnvelope<Vec<Value>> = self.client.get("/skills").await?;
        Ok(decode_each(envelope.data.unwrap_or_default()))
    }

    async fn get(&self, id: &str) -> Result<Skill, RequestError> {
        let envelope: ApiEnvelope<SkillRecord> =
            self.client.get(&format!("/skills/{}", id)).await?;
        single(envelope.data, id)
    }

    async fn create(&self, payload: &SkillPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<Value> = self.client.post("/skills", Some(payload)).await?;
        Ok(())
    }

    async fn update(&self, id: &str, payload: &SkillPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<Value> = self.client.put(&format!("/skills/{}", id), payload).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RequestError> {
        self.client.delete(&format!("/skills/{}", id)).await
    }
}
