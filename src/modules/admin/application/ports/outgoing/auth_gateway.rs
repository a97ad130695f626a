// src/modules/admin/application/ports/outgoing/auth_gateway.rs
use async_trait::async_trait;

use crate::shared::http::RequestError;

/// Answer of the quick-login endpoint when the HTTP call itself succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickLoginOutcome {
    Granted { token: String },
    Refused { message: Option<String> },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn quick_login(&self, password: &str) -> Result<QuickLoginOutcome, RequestError>;

    /// Whether the server accepts the stored token.
    async fn verify_token(&self) -> Result<bool, RequestError>;
}
