//! API Error Types
//!
//! Every failed call is mapped onto one of these kinds so callers can branch
//! without inspecting message strings.

use thiserror::Error;

/// Shown when the server gave no message
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401/403, or a session that is no longer valid
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected input, either by the server or before sending
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Request never completed or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string());
        match status {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            400 | 409 | 422 => ApiError::Validation(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Message suitable for a notification
    pub fn user_message(&self) -> &str {
        let message = match self {
            ApiError::Unauthorized(m)
            | ApiError::NotFound(m)
            | ApiError::Validation(m)
            | ApiError::Network(m) => m,
            ApiError::Server { message, .. } => message,
        };
        if message.trim().is_empty() { GENERIC_MESSAGE } else { message }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
