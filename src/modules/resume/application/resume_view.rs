// src/modules/resume/application/resume_view.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::resume::application::domain::entities::{ResumeCollections, ResumeKind};

/// One resume card, whatever its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResumeEntryView {
    pub id: String,
    pub heading: String,
    pub subheading: String,
    pub period: String,
    pub gpa: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResumeTabView {
    pub kind: ResumeKind,
    pub title: String,
    pub entries: Vec<ResumeEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResumeView {
    pub tabs: Vec<ResumeTabView>,
}

impl ResumeView {
    /// Tabs always come in the order experience, education, certificates.
    pub fn build(collections: &ResumeCollections) -> Self {
        let tabs = ResumeKind::ALL
            .iter()
            .map(|kind| ResumeTabView {
                kind: *kind,
                title: kind.tab_title().to_string(),
                entries: entries_for(collections, *kind),
            })
            .collect();

        Self { tabs }
    }
}

fn entries_for(collections: &ResumeCollections, kind: ResumeKind) -> Vec<ResumeEntryView> {
    match kind {
        ResumeKind::Experience => collections
            .experience
            .iter()
            .map(|e| ResumeEntryView {
                id: e.id.clone(),
                heading: e.title.clone(),
                subheading: e.company.clone(),
                period: e.period.clone(),
                gpa: None,
                bullets: e.description.clone(),
            })
            .collect(),
        ResumeKind::Education => collections
            .education
            .iter()
            .map(|e| ResumeEntryView {
                id: e.id.clone(),
                heading: e.degree.clone(),
                subheading: e.institution.clone(),
                period: e.period.clone(),
                gpa: e.gpa.clone(),
                bullets: e.highlights.clone(),
            })
            .collect(),
        ResumeKind::Certification => collections
            .certifications
            .iter()
            .map(|c| ResumeEntryView {
                id: c.id.clone(),
                heading: c.name.clone(),
                subheading: c.issuer.clone(),
                period: c.date.clone(),
                gpa: None,
                bullets: c.description.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resume::application::domain::entities::Education;

    #[test]
    fn three_tabs_even_when_empty() {
        let view = ResumeView::build(&ResumeCollections::default());

        let titles: Vec<_> = view.tabs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Experience", "Education", "Certificates"]);
        assert!(view.tabs.iter().all(|t| t.entries.is_empty()));
    }

    #[test]
    fn education_card_carries_gpa_and_highlights() {
        let collections = ResumeCollections {
            education: vec![Education {
                id: "1".to_string(),
                degree: "BSc".to_string(),
                institution: "Uni".to_string(),
                period: "2021 - 2025".to_string(),
                gpa: Some("3.9".to_string()),
                highlights: vec!["Dean's list".to_string()],
            }],
            ..Default::default()
        };

        let view = ResumeView::build(&collections);
        let card = &view.tabs[1].entries[0];

        assert_eq!(card.heading, "BSc");
        assert_eq!(card.gpa.as_deref(), Some("3.9"));
        assert_eq!(card.bullets, vec!["Dean's list".to_string()]);
    }
}
