// src/modules/contact/application/ports/outgoing/contact_store.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::shared::http::RequestError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Public; needs no token.
    async fn send(&self, payload: &ContactPayload) -> Result<(), RequestError>;

    async fn get_all(&self) -> Result<Vec<ContactMessage>, RequestError>;

    async fn get(&self, id: &str) -> Result<ContactMessage, RequestError>;

    async fn update_status(&self, id: &str, status: &str) -> Result<(), RequestError>;

    async fn delete(&self, id: &str) -> Result<(), RequestError>;
}
