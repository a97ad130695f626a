// src/modules/contact/application/contact_form.rs
use std::sync::Arc;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::modules::contact::application::ports::outgoing::{ContactPayload, ContactStore};
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, Notification, NotificationLevel, Validate, ValidationError,
};

pub const SEND_FAILED_FALLBACK: &str = "Failed to send message";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactFormDraft {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactFormDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("subject", &self.subject)?;
        require_non_empty("message", &self.message)?;

        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(ValidationError::new(
                "email",
                "Please enter a valid email address",
            ));
        }
        Ok(())
    }
}

impl From<&ContactFormDraft> for ContactPayload {
    fn from(draft: &ContactFormDraft) -> Self {
        ContactPayload {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            message: draft.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Remote(#[from] RequestError),
}

impl ContactFormError {
    pub fn notification(&self) -> Notification {
        let description = match self {
            ContactFormError::Validation(e) => e.message.clone(),
            ContactFormError::Remote(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    SEND_FAILED_FALLBACK.to_string()
                } else {
                    message
                }
            }
        };
        Notification::error(description)
    }
}

/// The public "Get In Touch" form. Needs no edit mode.
///
/// The last submitted values are kept after a failure so the page can show
/// them again; a successful send clears them.
pub struct ContactForm {
    store: Arc<dyn ContactStore>,
    draft: RwLock<ContactFormDraft>,
}

impl ContactForm {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            draft: RwLock::new(ContactFormDraft::default()),
        }
    }

    pub async fn draft(&self) -> ContactFormDraft {
        self.draft.read().await.clone()
    }

    pub async fn send(&self, draft: ContactFormDraft) -> Result<Notification, ContactFormError> {
        *self.draft.write().await = draft.clone();
        draft.validate()?;

        if let Err(e) = self.store.send(&ContactPayload::from(&draft)).await {
            error!("Failed to send contact message: {}", e);
            return Err(e.into());
        }

        *self.draft.write().await = ContactFormDraft::default();
        info!("Contact message sent");
        Ok(Notification::new(
            NotificationLevel::Success,
            "Message Sent",
            "Thank you for reaching out. I'll get back to you soon",
        ))
    }
}
