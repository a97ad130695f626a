pub mod cancel_session;
pub mod delete_record;
pub mod edit_draft;
pub mod get_page;
pub mod open_session;
pub mod refresh_section;
pub mod submit_session;

pub use cancel_session::cancel_session_handler;
pub use delete_record::delete_record_handler;
pub use edit_draft::edit_draft_handler;
pub use get_page::{page_html_handler, page_view_handler};
pub use open_session::open_session_handler;
pub use refresh_section::refresh_section_handler;
pub use submit_session::submit_session_handler;
