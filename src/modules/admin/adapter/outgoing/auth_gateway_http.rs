// src/modules/admin/adapter/outgoing/auth_gateway_http.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::admin::application::ports::outgoing::{AuthGateway, QuickLoginOutcome};
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

#[derive(Debug, Serialize)]
struct QuickLoginBody<'a> {
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    token: Option<String>,
}

#[derive(Clone)]
pub struct AuthGatewayHttp {
    client: RestClient,
}

impl AuthGatewayHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayHttp {
    async fn quick_login(&self, password: &str) -> Result<QuickLoginOutcome, RequestError> {
        let envelope: ApiEnvelope<TokenData> = self
            .client
            .post("/auth/quick-login", Some(&QuickLoginBody { password }))
            .await?;

        let token = envelope
            .data
            .and_then(|d| d.token)
            .filter(|t| !t.is_empty());

        Ok(match (envelope.success, token) {
            (true, Some(token)) => QuickLoginOutcome::Granted { token },
            _ => QuickLoginOutcome::Refused {
                message: envelope.message,
            },
        })
    }

    async fn verify_token(&self) -> Result<bool, RequestError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .client
            .post::<(), _>("/auth/verify-token", None)
            .await?;
        Ok(envelope.success)
    }
}
