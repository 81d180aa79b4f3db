//! Request descriptors and path templating.
//!
//! An adapter turns a logical operation into a [`RequestDescriptor`] in two
//! steps: resolve `{name}` placeholders in the endpoint path template
//! ([`implode_params`]), then either append the leftover parameters as a
//! query string (public endpoints, [`build_query_string`]) or hand them to
//! the signing collaborator (private endpoints). Parameters keep their
//! insertion order end to end so that produced URLs are reproducible.

use crate::error::{RequestError, Result};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// HTTP request methods supported by the adapter surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// GET request.
    #[default]
    Get,
    /// POST request.
    Post,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Convert to uppercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered request parameters.
///
/// A plain pair list rather than a map: placeholder resolution needs removal
/// by key, and query-string construction needs stable insertion order.
pub type Params = Vec<(String, String)>;

/// A fully-formed, possibly not-yet-signed HTTP request.
///
/// Ephemeral: produced by an adapter's `sign`, consumed immediately by the
/// transport. `headers` and `body` pass through from the caller untouched;
/// the builder only ever writes the URL.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    /// Absolute request URL.
    pub url: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Request headers, if any were supplied or added by a signer.
    pub headers: Option<HeaderMap>,
    /// JSON request body, if any.
    pub body: Option<Value>,
}

/// Substitute `{name}` placeholders in a path template.
///
/// Each placeholder consumes the identically-named parameter; consumed
/// parameters are removed from the returned residual list. A placeholder
/// with no matching parameter is a caller contract violation and fails with
/// [`RequestError::MissingPathParameter`]. A `{` with no closing `}` is
/// treated as literal text (templates are static configuration).
///
/// ```rust
/// use bitpanda_core::request::implode_params;
///
/// let params = vec![("order_id".to_string(), "42".to_string())];
/// let (path, residual) = implode_params("account/orders/{order_id}", params).unwrap();
/// assert_eq!(path, "account/orders/42");
/// assert!(residual.is_empty());
/// ```
pub fn implode_params(template: &str, params: Params) -> Result<(String, Params)> {
    let mut resolved = String::with_capacity(template.len());
    let mut residual = params;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (head, tail) = rest.split_at(open);
        resolved.push_str(head);

        let Some(close) = tail.find('}') else {
            resolved.push_str(tail);
            return Ok((resolved, residual));
        };
        let name = &tail[1..close];

        let index = residual
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| RequestError::missing_path_parameter(name.to_string()))?;
        let (_, value) = residual.remove(index);
        resolved.push_str(&value);

        rest = &tail[close + 1..];
    }

    resolved.push_str(rest);
    Ok((resolved, residual))
}

/// Build a percent-encoded query string, preserving parameter order.
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
