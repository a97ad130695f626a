mod page;
mod page_view;
mod targets;

pub use page::{Page, PageStores, Readiness};
pub use page_view::{PageSessions, PageView, UiState};
pub use targets::{DraftPayload, SectionName, SessionTarget};
