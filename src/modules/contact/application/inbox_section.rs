// src/modules/contact/application/inbox_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::ContactStore;
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, SectionDescriptor, SectionResource, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactStatusDraft {
    #[schema(example = "read")]
    pub status: String,
}

impl Validate for ContactStatusDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("status", &self.status)
    }
}

/// Owner-only view of received messages. Visitors write through the
/// contact form, so no new records are created here.
pub struct InboxSection {
    store: Arc<dyn ContactStore>,
}

impl InboxSection {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for InboxSection {
    type Data = Vec<ContactMessage>;
    type Key = String;
    type Draft = ContactStatusDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "contacts",
            label: "Message",
            can_create: false,
            can_delete: true,
            private: true,
        }
    }

    async fn fetch(&self) -> Result<Vec<ContactMessage>, RequestError> {
        let mut messages = self.store.get_all().await?;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn update(&self, id: &String, draft: &ContactStatusDraft) -> Result<(), RequestError> {
        self.store.update_status(id, draft.status.trim()).await
    }

    async fn delete(&self, id: &String) -> Result<(), RequestError> {
        self.store.delete(id).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> ContactStatusDraft {
        ContactStatusDraft::default()
    }

    fn draft_for(&self, data: &Vec<ContactMessage>, id: &String) -> Option<ContactStatusDraft> {
        data.iter().find(|m| &m.id == id).map(|m| ContactStatusDraft {
            status: m.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::ContactPayload;
    use crate::shared::section::{Section, SectionError};
    use crate::shared::storage::InMemoryLocalStore;
    use chrono::{TimeZone, Utc};

    struct FixedInbox;

    fn message(id: &str, day: u32) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            status: "new".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).unwrap()),
        }
    }

    #[async_trait]
    impl ContactStore for FixedInbox {
        async fn send(&self, _payload: &ContactPayload) -> Result<(), RequestError> {
            Ok(())
        }

        async fn get_all(&self) -> Result<Vec<ContactMessage>, RequestError> {
            Ok(vec![message("old", 1), message("new", 9)])
        }

        async fn get(&self, id: &str) -> Result<ContactMessage, RequestError> {
            Ok(message(id, 1))
        }

        async fn update_status(&self, _id: &str, _status: &str) -> Result<(), RequestError> {
            Ok(())
        }

        async fn delete(&self, _id: &str) -> Result<(), RequestError> {
            Ok(())
        }
    }

    fn section(edit_mode: bool) -> Section<InboxSection> {
        let ctx = SiteContext::new(Arc::new(InMemoryLocalStore::default()));
        if edit_mode {
            ctx.grant_edit_mode("token").unwrap();
        }
        Section::new(InboxSection::new(Arc::new(FixedInbox)), ctx)
    }

    #[tokio::test]
    async fn inbox_stays_empty_outside_edit_mode() {
        let section = section(false);

        section.load().await;

        assert!(section.data().await.is_empty());
    }

    #[tokio::test]
    async fn inbox_lists_newest_first_in_edit_mode() {
        let section = section(true);

        section.load().await;

        let ids: Vec<_> = section.data().await.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["new".to_string(), "old".to_string()]);
    }

    #[tokio::test]
    async fn inbox_cannot_open_new_record() {
        let section = section(true);

        let err = section.open_new().await.unwrap_err();

        assert!(matches!(err, SectionError::Unsupported(_)));
    }
}
