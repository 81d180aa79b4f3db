//! Endpoint type definitions for API routing.

use serde::{Deserialize, Serialize};

/// Distinguishes public from private (authenticated) API endpoints.
///
/// Request builders use this partition to resolve the base URL and to decide
/// whether residual parameters become a query string or are handed to the
/// signing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EndpointType {
    /// Public API endpoint (no authentication required).
    #[default]
    Public,
    /// Private API endpoint (authentication required).
    Private,
}

impl EndpointType {
    /// Returns `true` if this is a public endpoint.
    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Returns `true` if this is a private endpoint.
    #[inline]
    pub const fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

impl std::fmt::Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(EndpointType::Public.is_public());
        assert!(!EndpointType::Public.is_private());
        assert!(EndpointType::Private.is_private());
    }

    #[test]
    fn test_display() {
        assert_eq!(EndpointType::Public.to_string(), "public");
        assert_eq!(EndpointType::Private.to_string(), "private");
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(EndpointType::default(), EndpointType::Public);
    }
}
