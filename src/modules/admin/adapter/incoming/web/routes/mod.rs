pub mod login;
pub mod logout;
pub mod verify;

pub use login::{admin_login_handler, LoginRequest};
pub use logout::admin_logout_handler;
pub use verify::{admin_verify_handler, VerifyResponse};
