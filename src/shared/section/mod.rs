mod controller;
mod edit_session;
mod error;
mod notification;
mod resource;
mod validation;
mod view_cache;

pub use controller::{Section, SectionSnapshot, SnapshotOf};
pub use edit_session::{EditSession, SessionError};
pub use error::SectionError;
pub use notification::{Notification, NotificationLevel};
pub use resource::{unsupported, SectionDescriptor, SectionResource};
pub use validation::{
    clean_list, require_non_empty, require_non_empty_list, Validate, ValidationError,
    REQUIRED_FIELDS_MESSAGE,
};
pub use view_cache::ViewCache;
