// src/modules/resume/adapter/outgoing/resume_store_local.rs
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::resume::application::domain::entities::{
    Certification, Education, Experience, ResumeCollections, ResumeItem, ResumeKind,
};
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::http::RequestError;
use crate::shared::storage::{LocalDocument, LocalPersistence, LocalStore};

/// Local storage key used when resume persistence is enabled.
pub const RESUME_STORAGE_KEY: &str = "resumeCollections";

pub struct ResumeStoreLocal {
    document: LocalDocument<ResumeCollections>,
}

impl ResumeStoreLocal {
    pub fn open(persistence: LocalPersistence, local_store: Arc<dyn LocalStore>) -> Self {
        Self {
            document: LocalDocument::open(
                persistence,
                local_store,
                RESUME_STORAGE_KEY,
                sample_collections(),
            ),
        }
    }

    pub fn with_collections(collections: ResumeCollections) -> Self {
        Self {
            document: LocalDocument::ephemeral(collections),
        }
    }
}

#[async_trait]
impl ResumeStore for ResumeStoreLocal {
    async fn get_all(&self) -> Result<ResumeCollections, RequestError> {
        Ok(self.document.snapshot())
    }

    async fn create(&self, item: ResumeItem) -> Result<ResumeItem, RequestError> {
        let item = item.with_id(Uuid::new_v4().to_string());

        self.document.mutate(|c| {
            c.push(item.clone());
            Ok(())
        })?;

        info!("Added {} entry {}", item.kind().label(), item.id());
        Ok(item)
    }

    async fn update(&self, item: ResumeItem) -> Result<ResumeItem, RequestError> {
        self.document.mutate(|c| {
            if c.replace(item.clone()) {
                Ok(())
            } else {
                Err(RequestError::NotFound(item.kind().label().to_string()))
            }
        })?;

        Ok(item)
    }

    async fn delete(&self, kind: ResumeKind, id: &str) -> Result<(), RequestError> {
        self.document.mutate(|c| {
            if c.remove(kind, id) {
                Ok(())
            } else {
                Err(RequestError::NotFound(kind.label().to_string()))
            }
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Entries shown until the owner edits the resume.
pub(crate) fn sample_collections() -> ResumeCollections {
    ResumeCollections {
        experience: vec![Experience {
            id: "1".to_string(),
            title: "Full Stack Developer Intern".to_string(),
            company: "Sampath Software Solutions".to_string(),
            period: "Jan 2024 - Jun 2024".to_string(),
            description: strings(&[
                "Developed enterprise-level applications using .NET Blazor and MAUI frameworks",
                "Created inventory management and payroll systems with comprehensive reporting features",
                "Collaborated with senior developers to implement best practices and coding standards",
                "Participated in code reviews and contributed to system architecture decisions",
            ]),
        }],
        education: vec![Education {
            id: "1".to_string(),
            degree: "Bachelor of Technology in Computer Science".to_string(),
            institution: "Vignan's Institute of Information Technology".to_string(),
            period: "2021 - 2025".to_string(),
            gpa: Some("8.5/10".to_string()),
            highlights: strings(&[
                "Specialization in Web Technologies and Software Engineering",
                "Active member of coding club and tech societies",
                "Participated in multiple hackathons and coding competitions",
            ]),
        }],
        certifications: vec![
            Certification {
                id: "1".to_string(),
                name: "Full Stack Web Development".to_string(),
                issuer: "Coursera".to_string(),
                date: "2023".to_string(),
                description: strings(&["Comprehensive course covering MERN stack development"]),
            },
            Certification {
                id: "2".to_string(),
                name: "Microsoft Certified: Azure Fundamentals".to_string(),
                issuer: "Microsoft".to_string(),
                date: "2024".to_string(),
                description: strings(&["Cloud computing fundamentals and Azure services"]),
            },
            Certification {
                id: "3".to_string(),
                name: "React - The Complete Guide".to_string(),
                issuer: "Udemy".to_string(),
                date: "2023".to_string(),
                description: strings(&["Advanced React concepts, hooks, and state management"]),
            },
        ],
    }
}
