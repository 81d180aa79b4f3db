//! Exchange configuration structures and builders.
//!
//! Configuration is immutable after construction: adapters read it, never
//! mutate it, so instances can be shared freely across tasks.

use crate::credentials::SecretString;
use std::collections::HashMap;
use std::time::Duration;

/// Exchange configuration.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Exchange identifier.
    pub id: String,
    /// Exchange display name.
    pub name: String,
    /// API key for authentication (zeroed on drop).
    pub api_key: Option<SecretString>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds).
    pub connect_timeout: Duration,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Enable verbose logging.
    pub verbose: bool,
    /// URL overrides for mocking/testing, keyed by partition name.
    pub url_overrides: HashMap<String, String>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            api_key: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
            verbose: false,
            url_overrides: HashMap::new(),
        }
    }
}

impl ExchangeConfig {
    /// Create a new configuration builder.
    ///
    /// ```rust
    /// use bitpanda_core::ExchangeConfig;
    ///
    /// let config = ExchangeConfig::builder()
    ///     .id("bitpanda")
    ///     .name("Bitpanda Pro")
    ///     .api_key("your-api-key")
    ///     .build();
    /// ```
    pub fn builder() -> ExchangeConfigBuilder {
        ExchangeConfigBuilder::default()
    }
}

/// Builder for [`ExchangeConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExchangeConfigBuilder {
    config: ExchangeConfig,
}

impl ExchangeConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exchange identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = id.into();
        self
    }

    /// Set the exchange display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the TCP connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Enable verbose logging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Override the base URL of a partition (testing seam).
    pub fn url_override(mut self, partition: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.url_overrides.insert(partition.into(), url.into());
        self
    }

    /// Finalize the configuration.
    pub fn build(self) -> ExchangeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ExchangeConfig::builder().build();
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ExchangeConfig::builder()
            .id("bitpanda")
            .name("Bitpanda Pro")
            .api_key("key")
            .timeout(Duration::from_secs(5))
            .url_override("public", "http://localhost:9999")
            .build();
        assert_eq!(config.id, "bitpanda");
        assert_eq!(config.name, "Bitpanda Pro");
        assert_eq!(config.api_key.unwrap().expose(), "key");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.url_overrides.get("public").map(String::as_str),
            Some("http://localhost:9999")
        );
    }
}
