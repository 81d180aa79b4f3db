//! HTTP client abstraction layer.
//!
//! A thin `reqwest` wrapper implementing [`Transport`]: per-request timeout
//! control, JSON decoding, and mapping of HTTP status codes onto the error
//! taxonomy. Retry policy and rate limiting are intentionally not handled
//! here; callers own those concerns.

use crate::error::{Error, NetworkError, Result};
use crate::request::{HttpMethod, RequestDescriptor};
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Total request timeout.
    pub timeout: Duration,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("bitpanda-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new client from `config`.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(NetworkError::from)?;
        Ok(Self { client })
    }

    /// Performs a GET request and decodes the JSON response.
    pub async fn get(&self, url: &str, headers: Option<HeaderMap>) -> Result<Value> {
        self.execute(RequestDescriptor {
            url: url.to_string(),
            method: HttpMethod::Get,
            headers,
            body: None,
        })
        .await
    }

    /// Performs a POST request with an optional JSON body.
    pub async fn post(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<Value> {
        self.execute(RequestDescriptor {
            url: url.to_string(),
            method: HttpMethod::Post,
            headers,
            body,
        })
        .await
    }

    /// Performs a DELETE request.
    pub async fn delete(&self, url: &str, headers: Option<HeaderMap>) -> Result<Value> {
        self.execute(RequestDescriptor {
            url: url.to_string(),
            method: HttpMethod::Delete,
            headers,
            body: None,
        })
        .await
    }
}

/// Maps a non-success HTTP status onto the error taxonomy.
fn handle_http_error(status: u16, body: &str) -> Error {
    match status {
        400 => Error::invalid_request(body.to_string()),
        401 | 403 => Error::authentication(body.to_string()),
        404 => Error::invalid_request(format!("Endpoint not found: {body}")),
        429 => Error::rate_limit(body.to_string(), None),
        500..=599 => Error::exchange(status.to_string(), body),
        _ => Error::Network(NetworkError::Http {
            status,
            body: body.to_string(),
        }),
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        if let Some(headers) = request.headers {
            builder = builder.headers(headers);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Network(NetworkError::Timeout)
            } else if e.is_connect() {
                Error::Network(NetworkError::Connect(e.to_string()))
            } else {
                Error::Network(NetworkError::from(e))
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(NetworkError::from)?;

        if !status.is_success() {
            return Err(handle_http_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::from(crate::error::ParseError::Json(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("bitpanda-rs/"));
    }

    #[test]
    fn test_handle_http_error_mapping() {
        assert!(matches!(
            handle_http_error(400, "bad"),
            Error::InvalidRequest(_)
        ));
        assert!(matches!(
            handle_http_error(401, "key"),
            Error::Authentication(_)
        ));
        assert!(matches!(
            handle_http_error(429, "slow"),
            Error::RateLimit { .. }
        ));
        assert!(matches!(
            handle_http_error(503, "down"),
            Error::Exchange { .. }
        ));
        assert!(matches!(
            handle_http_error(302, "moved"),
            Error::Network(NetworkError::Http { status: 302, .. })
        ));
    }
}
