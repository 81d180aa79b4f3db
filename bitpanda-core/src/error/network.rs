//! Network/transport error types.

use thiserror::Error;

/// Errors originating in the HTTP transport layer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Non-success HTTP status without a structured exchange payload.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Failure establishing a connection.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Underlying client error.
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    /// Returns `true` if the failure is transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Connect(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        assert!(NetworkError::Timeout.is_retryable());
    }

    #[test]
    fn test_server_error_is_retryable() {
        let err = NetworkError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_error_is_not_retryable() {
        let err = NetworkError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert!(!err.is_retryable());
    }
}
