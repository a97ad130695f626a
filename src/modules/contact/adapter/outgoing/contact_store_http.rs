// src/modules/contact/adapter/outgoing/contact_store_http.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::contact::application::domain::entities::{ContactMessage, DEFAULT_STATUS};
use crate::modules::contact::application::ports::outgoing::{ContactPayload, ContactStore};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ContactRecord> for ContactMessage {
    fn from(r: ContactRecord) -> Self {
        ContactMessage {
            id: r.id,
            name: r.name.unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            subject: r.subject.unwrap_or_default(),
            message: r.message.unwrap_or_default(),
            status: r
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            created_at: r.created_at,
        }
    }
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
}

fn single(record: Option<ContactRecord>, id: &str) -> Result<ContactMessage, RequestError> {
    record
        .map(ContactMessage::from)
        .ok_or_else(|| RequestError::Decode(format!("contact '{}' missing from response", id)))
}

#[derive(Clone)]
pub struct ContactStoreHttp {
    client: RestClient,
}

impl ContactStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactStore for ContactStoreHttp {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RequestError> {
        let _: ApiEnvelope<Value> = self.client.post("/contacts", Some(payload)).await?;
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<ContactMessage>, RequestError> {
        let envelope: ApiEnvelope<Vec<ContactRecord>> = self.client.get("/contacts").await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(ContactMessage::from)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<ContactMessage, RequestError> {
        let envelope: ApiEnvelope<ContactRecord> =
            self.client.get(&format!("/contacts/{}", id)).await?;
        single(envelope.data, id)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), RequestError> {
        let _: ApiEnvelope<Value> = self
            .client
            .put(&format!("/contacts/{}", id), &StatusBody { status })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RequestError> {
        self.client.delete(&format!("/contacts/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_reads_as_new() {
        let record: ContactRecord = serde_json::from_str(
            r#"{"_id":"c1","name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello","createdAt":"2025-05-01T08:00:00Z"}"#,
        )
        .unwrap();

        let message = ContactMessage::from(record);

        assert_eq!(message.status, "new");
        assert!(message.created_at.is_some());
    }

    #[test]
    fn status_body_has_single_field() {
        let json = serde_json::to_value(StatusBody { status: "read" }).unwrap();

        assert_eq!(json, serde_json::json!({"status": "read"}));
    }
}
