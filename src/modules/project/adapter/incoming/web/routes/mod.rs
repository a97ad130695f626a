pub mod add_category;
pub mod delete_category;
pub mod get_categories;
pub mod rename_category;
pub mod set_active_category;

pub use add_category::{add_category_handler, CategoryNameRequest};
pub use delete_category::delete_category_handler;
pub use get_categories::get_categories_handler;
pub use rename_category::rename_category_handler;
pub use set_active_category::set_active_category_handler;
