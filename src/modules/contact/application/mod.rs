pub mod domain;
pub mod ports;
mod contact_form;
mod inbox_section;

pub use contact_form::{ContactForm, ContactFormDraft, ContactFormError};
pub use inbox_section::{ContactStatusDraft, InboxSection};
