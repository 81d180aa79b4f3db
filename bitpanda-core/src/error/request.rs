//! Request-construction error types.

use std::borrow::Cow;
use thiserror::Error;

/// Errors raised while turning a logical operation into an HTTP request.
///
/// These are caller contract violations, not runtime conditions: they are
/// surfaced immediately and never retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RequestError {
    /// A `{name}` placeholder in a path template had no matching parameter.
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(Cow<'static, str>),
}

impl RequestError {
    /// Creates a `MissingPathParameter` error.
    pub fn missing_path_parameter(name: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingPathParameter(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_parameter_display() {
        let err = RequestError::missing_path_parameter("order_id");
        assert_eq!(err.to_string(), "Missing path parameter: order_id");
    }
}
