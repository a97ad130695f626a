mod request_error;
mod rest_client;

pub use request_error::RequestError;
pub use rest_client::{ApiEnvelope, RestClient, AUTH_TOKEN_KEY, DEFAULT_FAILURE_MESSAGE};
