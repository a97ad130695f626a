// src/modules/resume/application/domain/entities.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResumeKind {
    Experience,
    Education,
    Certification,
}

impl ResumeKind {
    pub const ALL: [ResumeKind; 3] = [
        ResumeKind::Experience,
        ResumeKind::Education,
        ResumeKind::Certification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResumeKind::Experience => "Experience",
            ResumeKind::Education => "Education",
            ResumeKind::Certification => "Certification",
        }
    }

    pub fn tab_title(&self) -> &'static str {
        match self {
            ResumeKind::Experience => "Experience",
            ResumeKind::Education => "Education",
            ResumeKind::Certification => "Certificates",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub description: Vec<String>,
}

/// One entry of any kind, as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeItem {
    Experience(Experience),
    Education(Education),
    Certification(Certification),
}

impl ResumeItem {
    pub fn kind(&self) -> ResumeKind {
        match self {
            ResumeItem::Experience(_) => ResumeKind::Experience,
            ResumeItem::Education(_) => ResumeKind::Education,
            ResumeItem::Certification(_) => ResumeKind::Certification,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResumeItem::Experience(e) => &e.id,
            ResumeItem::Education(e) => &e.id,
            ResumeItem::Certification(c) => &c.id,
        }
    }

    pub fn with_id(mut self, id: String) -> Self {
        match &mut self {
            ResumeItem::Experience(e) => e.id = id,
            ResumeItem::Education(e) => e.id = id,
            ResumeItem::Certification(c) => c.id = id,
        }
        self
    }
}

/// The three independent resume lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ResumeCollections {
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl ResumeCollections {
    pub fn find(&self, kind: ResumeKind, id: &str) -> Option<ResumeItem> {
        match kind {
            ResumeKind::Experience => self
                .experience
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .map(ResumeItem::Experience),
            ResumeKind::Education => self
                .education
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .map(ResumeItem::Education),
            ResumeKind::Certification => self
                .certifications
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .map(ResumeItem::Certification),
        }
    }

    pub fn push(&mut self, item: ResumeItem) {
        match item {
            ResumeItem::Experience(e) => self.experience.push(e),
            ResumeItem::Education(e) => self.education.push(e),
            ResumeItem::Certification(c) => self.certifications.push(c),
        }
    }

    /// Returns false when no entry of that kind has the item's id.
    pub fn replace(&mut self, item: ResumeItem) -> bool {
        fn swap<T>(list: &mut [T], id_of: impl Fn(&T) -> &str, id: &str, value: T) -> bool {
            match list.iter_mut().find(|e| id_of(e) == id) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            }
        }

        let id = item.id().to_string();
        match item {
            ResumeItem::Experience(e) => swap(&mut self.experience, |x| x.id.as_str(), &id, e),
            ResumeItem::Education(e) => swap(&mut self.education, |x| x.id.as_str(), &id, e),
            ResumeItem::Certification(c) => {
                swap(&mut self.certifications, |x| x.id.as_str(), &id, c)
            }
        }
    }

    /// Returns false when nothing was removed.
    pub fn remove(&mut self, kind: ResumeKind, id: &str) -> bool {
        let before = self.len(kind);
        match kind {
            ResumeKind::Experience => self.experience.retain(|e| e.id != id),
            ResumeKind::Education => self.education.retain(|e| e.id != id),
            ResumeKind::Certification => self.certifications.retain(|c| c.id != id),
        }
        self.len(kind) != before
    }

    pub fn len(&self, kind: ResumeKind) -> usize {
        match kind {
            ResumeKind::Experience => self.experience.len(),
            ResumeKind::Education => self.education.len(),
            ResumeKind::Certification => self.certifications.len(),
        }
    }
}
