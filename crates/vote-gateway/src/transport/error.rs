//! HTTP boundary for `VoteError`.
//!
//! Handlers return `Result<_, ApiError>`; the status mapping happens once here.
//! Details are logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use vote_core::error::{ClientCode, VoteError};

#[derive(Debug)]
pub struct ApiError(pub VoteError);

impl From<VoteError> for ApiError {
    fn from(e: VoteError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::QueueUnavailable | ClientCode::InvalidConfig | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code();
        if code.is_client_error() {
            tracing::warn!(code = code.as_str(), error = %self.0, "rejecting request");
        } else {
            tracing::error!(code = code.as_str(), error = %self.0, "request failed");
        }

        let body = match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            _ => "Internal Server Error",
        };
        (status, body).into_response()
    }
}
