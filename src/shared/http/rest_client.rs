// src/shared/http/rest_client.rs
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shared::http::RequestError;
use crate::shared::storage::LocalStore;

/// Local storage key holding the admin bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

pub const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

//
// ──────────────────────────────────────────────────────────
// Response envelope
// ──────────────────────────────────────────────────────────
// The portfolio API wraps every payload as:
//   { "success": bool, "data": T?, "message": String? }
//

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

/// Thin JSON client for the portfolio REST API.
///
/// The bearer token is read from local storage on every call, so a login or
/// logout takes effect on the next request without rebuilding the client.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    local_store: Arc<dyn LocalStore>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, local_store: Arc<dyn LocalStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            local_store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let bytes = self.send(Method::GET, path, None).await?;
        decode(&bytes)
    }

    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = body.map(|b| encode(b)).transpose()?;
        let bytes = self.send(Method::POST, path, payload).await?;
        decode(&bytes)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = encode(body)?;
        let bytes = self.send(Method::PUT, path, Some(payload)).await?;
        decode(&bytes)
    }

    /// DELETE responses are not decoded; some servers answer with an empty body.
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.send(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Any HTTP answer from the API origin counts as reachable.
    pub async fn probe(&self) -> Result<(), RequestError> {
        self.http
            .get(&self.base_url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| RequestError::Transport(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, RequestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.local_store.get(AUTH_TOKEN_KEY) {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

            return Err(RequestError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(bytes.to_vec())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, RequestError> {
    serde_json::to_vec(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice(bytes).map_err(|e| RequestError::Decode(e.to_string()))
}
