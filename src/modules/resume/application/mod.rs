pub mod domain;
pub mod ports;
mod resume_section;
mod resume_view;

pub use resume_section::{
    CertificationDraft, EducationDraft, ExperienceDraft, ResumeDraft, ResumeKey, ResumeSection,
};
pub use resume_view::{ResumeEntryView, ResumeTabView, ResumeView};
