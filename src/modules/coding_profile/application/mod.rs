mod coding_profile_section;
pub mod domain;
pub mod ports;

pub use coding_profile_section::{CodingProfileDraft, CodingProfileSection, CodingProfileView};
