// src/modules/resume/application/resume_section.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, ResumeCollections, ResumeItem, ResumeKind,
};
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::context::SiteContext;
use crate::shared::http::RequestError;
use crate::shared::section::{
    clean_list, require_non_empty, require_non_empty_list, SectionDescriptor, SectionResource,
    Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ResumeKey {
    pub kind: ResumeKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub gpa: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeDraft {
    Experience(ExperienceDraft),
    Education(EducationDraft),
    Certification(CertificationDraft),
}

impl ResumeDraft {
    pub fn blank(kind: ResumeKind) -> Self {
        match kind {
            ResumeKind::Experience => ResumeDraft::Experience(ExperienceDraft::default()),
            ResumeKind::Education => ResumeDraft::Education(EducationDraft::default()),
            ResumeKind::Certification => ResumeDraft::Certification(CertificationDraft::default()),
        }
    }

    pub fn kind(&self) -> ResumeKind {
        match self {
            ResumeDraft::Experience(_) => ResumeKind::Experience,
            ResumeDraft::Education(_) => ResumeKind::Education,
            ResumeDraft::Certification(_) => ResumeKind::Certification,
        }
    }

    pub fn into_item(self, id: String) -> ResumeItem {
        match self {
            ResumeDraft::Experience(d) => ResumeItem::Experience(Experience {
                id,
                title: d.title.trim().to_string(),
                company: d.company.trim().to_string(),
                period: d.period.trim().to_string(),
                description: clean_list(&d.description),
            }),
            ResumeDraft::Education(d) => {
                let gpa = d.gpa.trim();
                ResumeItem::Education(Education {
                    id,
                    degree: d.degree.trim().to_string(),
                    institution: d.institution.trim().to_string(),
                    period: d.period.trim().to_string(),
                    gpa: (!gpa.is_empty()).then(|| gpa.to_string()),
                    highlights: clean_list(&d.highlights),
                })
            }
            ResumeDraft::Certification(d) => ResumeItem::Certification(Certification {
                id,
                name: d.name.trim().to_string(),
                issuer: d.issuer.trim().to_string(),
                date: d.date.trim().to_string(),
                description: clean_list(&d.description),
            }),
        }
    }
}

impl From<ResumeItem> for ResumeDraft {
    fn from(item: ResumeItem) -> Self {
        match item {
            ResumeItem::Experience(e) => ResumeDraft::Experience(ExperienceDraft {
                title: e.title,
                company: e.company,
                period: e.period,
                description: e.description,
            }),
            ResumeItem::Education(e) => ResumeDraft::Education(EducationDraft {
                degree: e.degree,
                institution: e.institution,
                period: e.period,
                gpa: e.gpa.unwrap_or_default(),
                highlights: e.highlights,
            }),
            ResumeItem::Certification(c) => ResumeDraft::Certification(CertificationDraft {
                name: c.name,
                issuer: c.issuer,
                date: c.date,
                description: c.description,
            }),
        }
    }
}

impl Validate for ResumeDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ResumeDraft::Experience(d) => {
                require_non_empty("title", &d.title)?;
                require_non_empty("company", &d.company)?;
                require_non_empty("period", &d.period)?;
                require_non_empty_list("description", &d.description)
            }
            ResumeDraft::Education(d) => {
                require_non_empty("degree", &d.degree)?;
                require_non_empty("institution", &d.institution)?;
                require_non_empty("period", &d.period)?;
                require_non_empty_list("highlights", &d.highlights)
            }
            ResumeDraft::Certification(d) => {
                require_non_empty("name", &d.name)?;
                require_non_empty("issuer", &d.issuer)?;
                require_non_empty("date", &d.date)
            }
        }
    }
}

pub struct ResumeSection {
    store: Arc<dyn ResumeStore>,
}

impl ResumeSection {
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SectionResource for ResumeSection {
    type Data = ResumeCollections;
    type Key = ResumeKey;
    type Draft = ResumeDraft;

    fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            name: "resume",
            label: "Resume entry",
            can_create: true,
            can_delete: true,
            private: false,
        }
    }

    async fn fetch(&self) -> Result<ResumeCollections, RequestError> {
        self.store.get_all().await
    }

    async fn create(&self, draft: &ResumeDraft) -> Result<(), RequestError> {
        self.store
            .create(draft.clone().into_item(String::new()))
            .await
            .map(|_| ())
    }

    async fn update(&self, key: &ResumeKey, draft: &ResumeDraft) -> Result<(), RequestError> {
        self.store
            .update(draft.clone().into_item(key.id.clone()))
            .await
            .map(|_| ())
    }

    async fn delete(&self, key: &ResumeKey) -> Result<(), RequestError> {
        self.store.delete(key.kind, &key.id).await
    }

    fn blank_draft(&self, _ctx: &SiteContext) -> ResumeDraft {
        ResumeDraft::blank(ResumeKind::Experience)
    }

    fn draft_for(&self, data: &ResumeCollections, key: &ResumeKey) -> Option<ResumeDraft> {
        data.find(key.kind, &key.id).map(ResumeDraft::from)
    }

    fn check_conflicts(
        &self,
        _data: &ResumeCollections,
        key: Option<&ResumeKey>,
        draft: &ResumeDraft,
    ) -> Result<(), ValidationError> {
        match key {
            Some(key) if key.kind != draft.kind() => Err(ValidationError::new(
                "kind",
                format!("This entry is a {} entry", key.kind.label()),
            )),
            _ => Ok(()),
        }
    }

    fn label_for(&self, draft: &ResumeDraft) -> &'static str {
        draft.kind().label()
    }
}
