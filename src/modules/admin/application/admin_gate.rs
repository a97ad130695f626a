// src/modules/admin/application/admin_gate.rs
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::modules::admin::application::ports::outgoing::{AuthGateway, QuickLoginOutcome};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{Notification, NotificationLevel};

pub const DENIED_FALLBACK: &str = "Incorrect password. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminGateError {
    #[error("Please enter the admin password")]
    EmptyPassword,

    #[error("{0}")]
    Denied(String),

    #[error("Failed to store token: {0}")]
    Storage(String),
}

impl AdminGateError {
    pub fn notification(&self) -> Notification {
        Notification::new(NotificationLevel::Error, "Access Denied", self.to_string())
    }
}

/// Password gate in front of edit mode.
#[derive(Clone)]
pub struct AdminGate {
    gateway: Arc<dyn AuthGateway>,
    context: SiteContext,
}

impl AdminGate {
    pub fn new(gateway: Arc<dyn AuthGateway>, context: SiteContext) -> Self {
        Self { gateway, context }
    }

    pub async fn login(&self, password: &str) -> Result<Notification, AdminGateError> {
        if password.trim().is_empty() {
            return Err(AdminGateError::EmptyPassword);
        }

        let token = match self.gateway.quick_login(password).await {
            Ok(QuickLoginOutcome::Granted { token }) => token,
            Ok(QuickLoginOutcome::Refused { message }) => {
                warn!("Quick login refused");
                return Err(denied(message));
            }
            Err(RequestError::Status { status, message }) => {
                warn!("Quick login rejected with status {}", status);
                return Err(denied(Some(message)));
            }
            Err(e) => {
                error!("Quick login failed: {}", e);
                return Err(denied(Some(e.to_string())));
            }
        };

        self.context
            .grant_edit_mode(&token)
            .map_err(|e| AdminGateError::Storage(e.to_string()))?;

        info!("Edit mode granted");
        Ok(Notification::new(
            NotificationLevel::Success,
            "Access Granted",
            "You're now in edit mode!",
        ))
    }

    /// Drops the token and leaves edit mode. Sessions are closed by the page.
    pub fn logout(&self) -> Notification {
        if let Err(e) = self.context.revoke_edit_mode() {
            warn!("Failed to remove stored token: {}", e);
        }
        info!("Edit mode revoked");
        Notification::new(
            NotificationLevel::Success,
            "Signed Out",
            "Edit mode is now off",
        )
    }

    /// A rejected token answers `false`; other failures are returned.
    pub async fn verify(&self) -> Result<bool, RequestError> {
        if self.context.auth_token().is_none() {
            return Ok(false);
        }

        match self.gateway.verify_token().await {
            Ok(valid) => Ok(valid),
            Err(e) if e.is_unauthorized() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn denied(message: Option<String>) -> AdminGateError {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DENIED_FALLBACK.to_string());
    AdminGateError::Denied(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::MockAuthGateway;
    use crate::shared::http::AUTH_TOKEN_KEY;
    use crate::shared::storage::{InMemoryLocalStore, LocalStore};

    fn gate(mock: MockAuthGateway) -> (Arc<dyn LocalStore>, AdminGate) {
        let store: Arc<dyn LocalStore> = Arc::new(InMemoryLocalStore::default());
        let ctx = SiteContext::new(store.clone());
        (store, AdminGate::new(Arc::new(mock), ctx))
    }

    #[tokio::test]
    async fn empty_password_never_reaches_server() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login().never();

        let (_store, gate) = gate(mock);

        assert_eq!(
            gate.login("   ").await.unwrap_err(),
            AdminGateError::EmptyPassword
        );
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_enables_edit_mode() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login()
            .times(1)
            .returning(|_| {
                Ok(QuickLoginOutcome::Granted {
                    token: "tok-1".to_string(),
                })
            });

        let (store, gate) = gate(mock);
        let note = gate.login("letmein").await.unwrap();

        assert_eq!(note.title, "Access Granted");
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-1"));
        assert!(SiteContext::new(store).is_edit_mode());
    }

    #[tokio::test]
    async fn rejected_login_reports_server_message_and_stores_nothing() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login().returning(|_| {
            Err(RequestError::Status {
                status: 401,
                message: "Invalid password".to_string(),
            })
        });

        let (store, gate) = gate(mock);
        let err = gate.login("wrong").await.unwrap_err();

        assert_eq!(err, AdminGateError::Denied("Invalid password".to_string()));
        assert_eq!(err.notification().title, "Access Denied");
        assert!(store.get(AUTH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn refusal_without_message_uses_fallback() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login()
            .returning(|_| Ok(QuickLoginOutcome::Refused { message: None }));

        let (_store, gate) = gate(mock);

        assert_eq!(
            gate.login("wrong").await.unwrap_err().to_string(),
            DENIED_FALLBACK
        );
    }

    #[tokio::test]
    async fn verify_treats_unauthorized_as_invalid() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login().returning(|_| {
            Ok(QuickLoginOutcome::Granted {
                token: "stale".to_string(),
            })
        });
        mock.expect_verify_token().returning(|| {
            Err(RequestError::Status {
                status: 401,
                message: "Token expired".to_string(),
            })
        });

        let (_store, gate) = gate(mock);
        gate.login("letmein").await.unwrap();

        assert!(!gate.verify().await.unwrap());
    }

    #[tokio::test]
    async fn verify_without_token_skips_server() {
        let mut mock = MockAuthGateway::new();
        mock.expect_verify_token().never();

        let (_store, gate) = gate(mock);

        assert!(!gate.verify().await.unwrap());
    }

    #[tokio::test]
    async fn logout_clears_edit_mode() {
        let mut mock = MockAuthGateway::new();
        mock.expect_quick_login().returning(|_| {
            Ok(QuickLoginOutcome::Granted {
                token: "tok".to_string(),
            })
        });

        let (store, gate) = gate(mock);
        gate.login("letmein").await.unwrap();
        gate.logout();

        assert!(store.get(AUTH_TOKEN_KEY).is_none());
    }
}
