//! Error types for the frame server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use counterframe_protocol::TokenError;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the frame server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The state token failed verification.
    #[error("invalid state token")]
    MalformedToken,

    /// Invalid request format.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServerError::MalformedToken | ServerError::InvalidRequest(_)
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }

    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Returns the message shown to clients.
    ///
    /// Never includes the underlying cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServerError::MalformedToken => "Invalid state",
            ServerError::InvalidRequest(_) => "Invalid request",
            _ => "Internal server error",
        }
    }
}

impl From<TokenError> for ServerError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => ServerError::MalformedToken,
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (self.status_code(), self.public_message()).into_response()
    }
}
