// src/shared/http/request_error.rs

//
// ──────────────────────────────────────────────────────────
// Store boundary error
// ──────────────────────────────────────────────────────────
// Every store port (remote or client-local) fails with this type.
// A single attempt is made per call; nothing here is retried.
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    /// `message` is the server-supplied message when the body had one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected record shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// A client-local store could not be read or written.
    #[error("Local storage error: {0}")]
    Storage(String),

    /// A client-local store has no record under the given key.
    #[error("{0} not found")]
    NotFound(String),
}

impl RequestError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}
