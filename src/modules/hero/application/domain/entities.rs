// src/modules/hero/application/domain/entities.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_RESUME_LINK: &str = "#";

/// The owner's portfolio record. Only the resume link is interpreted here;
/// every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioInfo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "resumeLink", default, skip_serializing_if = "Option::is_none")]
    pub resume_link: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PortfolioInfo {
    pub fn resume_link_or_default(&self) -> &str {
        self.resume_link
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_RESUME_LINK)
    }
}
