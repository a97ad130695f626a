// src/modules/coding_profile/application/coding_profile_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::coding_profile::application::domain::entities::{
    CodingProfile, Platform, ProfileStats,
};
use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfilePayload, CodingProfileStore,
};
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    require_non_empty, SectionDescriptor, SectionResource, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct CodingProfileDraft {
    pub platform: Option<Platform>,
    pub username: String,
    pub profile_url: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub stats: ProfileStats,
}

impl Validate for CodingProfileDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.platform.is_none() {
            return Err(ValidationError::required("platform"));
        }
        require_non_empty("username", &self.username)?;
        require_non_empty("profile_url", &self.profile_url)
    }
}

impl CodingProfileDraft {
    /// Only called after validation.
    fn payload(&self, platform: Platform) -> CodingProfilePayload {
        let icon_url = self.icon_url.trim();
        CodingProfilePayload {
            platform,
            username: self.username.trim().to_string(),
            profile_url: self.profile_url.trim().to_string(),
            icon_url: (!icon_url.is_empty()).then(|| icon_url.to_string()),
            stats: self.stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CodingProfileView {
    pub platform: Platform,
    pub username: String,
    pub profile_url: String,
    pub logo: String,
    pub stats: ProfileStats,
}

impl CodingProfileView {
    /// Newest-updated first.
    pub fn build_all(profiles: &[CodingProfile]) -> Vec<CodingProfileView> {
        let mut sorted: Vec<&CodingProfile> = profiles.iter().collect();
        sorted.sort_by(|a, b| b.touched_at().cmp(&a.touched_at()));

        sorted
            .into_iter()
            .map(|p| CodingProfileView {
                platform: p.platform,
                username: p.username.clone(),
                profile_url: p.profile_url.clone(),
                logo: p.logo().to_string(),
                stats: p.stats,
            })
            .collect()
    }
}

pub struct CodingProfileSection {
    store: Arc<dyn CodingProfileStore>,
}

impl CodingProfileSection {
    pub fn new(store: Arc<dyn CodingProfileStore>) -> Self {
        Self { store }
    }
}

fn platform_of(draft: &CodingProfileDraft) -> Result<Platform, RequestError> {
    draft
        .platform
        .ok_or_else(|| RequestError::Decode("profile draft has no platform".to_string()))
}

#[async_trait]
impl SectionResource for CodingProfileSection {
    type Data = Vec<CodingProfile>;
    type Key = Platform;
    type Draft = CodingProfileDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "coding_profiles",
            label: "Profile",
            can_create: true,
            can_delete: true,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<Vec<CodingProfile>, RequestError> {
        self.store.get_all().await
    }

    async fn create(&self, draft: &CodingProfileDraft) -> Result<(), RequestError> {
        let platform = platform_of(draft)?;
        self.store.create(&draft.payload(platform)).await
    }

    async fn update(
        &self,
        platform: &Platform,
        draft: &CodingProfileDraft,
    ) -> Result<(), RequestError> {
        let target = platform_of(draft)?;
        self.store.update(*platform, &draft.payload(target)).await
    }

    async fn delete(&self, platform: &Platform) -> Result<(), RequestError> {
        self.store.delete(*platform).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> CodingProfileDraft {
        CodingProfileDraft::default()
    }

    fn draft_for(&self, data: &Vec<CodingProfile>, platform: &Platform) -> Option<CodingProfileDraft> {
        data.iter()
            .find(|p| p.platform == *platform)
            .map(|p| CodingProfileDraft {
                platform: Some(p.platform),
                username: p.username.clone(),
                profile_url: p.profile_url.clone(),
                icon_url: p.icon_url.clone().unwrap_or_default(),
                stats: p.stats,
            })
    }

    /// Platform is the unique key: a second profile for it is refused.
    fn check_conflicts(
        &self,
        data: &Vec<CodingProfile>,
        key: Option<&Platform>,
        draft: &CodingProfileDraft,
    ) -> Result<(), ValidationError> {
        let Some(platform) = draft.platform else {
            return Ok(());
        };
        if key == Some(&platform) {
            return Ok(());
        }
        if data.iter().any(|p| p.platform == platform) {
            return Err(ValidationError::new(
                "platform",
                format!("A {} profile already exists", platform),
            ));
        }
        Ok(())
    }
}
