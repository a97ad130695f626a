mod about_section;
pub mod domain;
pub mod ports;

pub use about_section::{AboutDraft, AboutSection, AboutView};
