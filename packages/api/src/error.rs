//! Error types for the console's REST client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the content API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered 401 to an authenticated request. The persisted session
    /// has already been cleared by the time this is returned.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx answer.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The body was not a `{ "data": ... }` envelope of the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A request body could not be assembled.
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// The server-provided message, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Build a [`ApiError::Server`] from a failed response body.
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self::Server { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Error body returned by the API: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}
