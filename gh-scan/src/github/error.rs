//! GitHub API error types.

use thiserror::Error;

/// Errors returned by a [`RestClient`](super::RestClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request failed before an API response was received.
    #[error("GitHub API error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from '{route}': {source}")]
    Decode {
        route: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns the HTTP status code, if the API produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for a `404 Not Found` response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true for a `403 Forbidden` response.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Status {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::Transport(other.to_string()),
        }
    }
}
