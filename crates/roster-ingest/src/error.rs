//! Error types for the provider client.

use thiserror::Error;

/// Errors that can occur while loading the roster.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status.
    #[error("provider returned HTTP {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
    },

    /// Failed to decode the provider payload.
    #[error("JSON decode error: {0}")]
    Decode(String),
}

impl IngestError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the student provider. Please check your internet connection."
            }
            Self::Status { .. } => "The student provider returned an error response.",
            Self::Decode(_) => "The student provider returned data this application could not read.",
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_presentable() {
        let err = IngestError::Status { status: 503 };
        assert_eq!(err.to_string(), "provider returned HTTP 503");
        assert!(err.user_message().contains("error response"));

        let err = IngestError::Network("connection refused".to_string());
        assert!(err.user_message().contains("internet connection"));
    }
}
