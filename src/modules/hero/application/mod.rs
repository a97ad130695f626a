pub mod domain;
mod hero_section;
pub mod ports;

pub use hero_section::{HeroSection, HeroView, ResumeLinkDraft};
