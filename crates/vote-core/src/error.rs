//! Shared error type across vote crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed form.
    BadRequest,
    /// Vote queue could not be reached.
    QueueUnavailable,
    /// Startup configuration rejected.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::QueueUnavailable => "QUEUE_UNAVAILABLE",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Whether the failure is attributable to the caller.
    pub fn is_client_error(self) -> bool {
        matches!(self, ClientCode::BadRequest)
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VoteError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("queue unavailable: {0}")]
    QueueUnavailable(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl VoteError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VoteError::BadRequest(_) => ClientCode::BadRequest,
            VoteError::QueueUnavailable(_) => ClientCode::QueueUnavailable,
            VoteError::Config(_) => ClientCode::InvalidConfig,
            VoteError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<serde_json::Error> for VoteError {
    fn from(e: serde_json::Error) -> Self {
        VoteError::Internal(format!("json encode failed: {e}"))
    }
}
