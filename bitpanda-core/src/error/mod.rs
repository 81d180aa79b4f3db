//! Error handling for the adapter stack.
//!
//! The error system follows a small hierarchy:
//!
//! ```text
//! Error (main error type)
//! ├── Exchange       - Exchange-reported API errors
//! ├── Network        - Transport layer errors (via NetworkError)
//! ├── Parse          - Response parsing errors (via ParseError)
//! ├── Request        - Request construction errors (via RequestError)
//! ├── Authentication - Missing/invalid credentials
//! ├── RateLimit      - Rate limiting with optional retry hint
//! └── InvalidRequest - Invalid caller-supplied parameters
//! ```
//!
//! Parsing anomalies in optional exchange metadata never surface as errors;
//! only contract violations do (a market without a base/quote code, a path
//! template placeholder with no matching parameter). Network, authentication,
//! and rate-limit errors originate in the transport and propagate through the
//! adapter unchanged.

mod network;
mod parse;
mod request;

use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

pub use network::NetworkError;
pub use parse::ParseError;
pub use request::RequestError;

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error reported by the exchange itself (non-2xx with a payload).
    #[error("Exchange error {code}: {message}")]
    Exchange {
        /// Exchange-assigned error code or HTTP status.
        code: String,
        /// Human-readable message from the exchange.
        message: String,
    },

    /// Transport layer failure.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Request construction failure.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Missing or rejected credentials.
    #[error("Authentication error: {0}")]
    Authentication(Cow<'static, str>),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Message from the exchange or transport.
        message: String,
        /// Suggested wait before retrying, when the exchange provides one.
        retry_after: Option<Duration>,
    },

    /// Invalid caller-supplied request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),
}

impl Error {
    /// Creates an exchange error.
    pub fn exchange(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Exchange {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates an invalid-request error.
    pub fn invalid_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a rate-limit error.
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<Duration>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a network error from a plain message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(NetworkError::Other(message.into()))
    }

    /// Returns `true` if retrying the operation may succeed.
    ///
    /// Parse and request errors are programming/contract violations and are
    /// never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_retryable(),
            Self::RateLimit { .. } => true,
            _ => false,
        }
    }

    /// Returns the suggested retry delay, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_display() {
        let err = Error::exchange("429", "Too many requests");
        assert_eq!(err.to_string(), "Exchange error 429: Too many requests");
    }

    #[test]
    fn test_authentication_static_message() {
        let err = Error::authentication("apiKey required");
        assert!(err.to_string().contains("apiKey required"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_rate_limit_is_retryable() {
        let err = Error::rate_limit("slow down", Some(Duration::from_secs(1)));
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_parse_error_not_retryable() {
        let err = Error::from(ParseError::missing_field("base.code"));
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("base.code"));
    }

    #[test]
    fn test_request_error_conversion() {
        let err = Error::from(RequestError::missing_path_parameter("order_id"));
        assert!(matches!(err, Error::Request(_)));
    }
}
