//! Builder for [`Bitpanda`] instances.

use crate::Bitpanda;
use bitpanda_core::{ExchangeConfig, Result, Transport};
use std::sync::Arc;
use std::time::Duration;

/// Fluent constructor for [`Bitpanda`].
///
/// ```rust,no_run
/// use bitpanda::Bitpanda;
///
/// let exchange = Bitpanda::builder()
///     .api_key("your-api-key")
///     .timeout(std::time::Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct BitpandaBuilder {
    api_key: Option<String>,
    timeout: Option<Duration>,
    verbose: bool,
    url_overrides: Vec<(String, String)>,
    transport: Option<Arc<dyn Transport>>,
}

impl BitpandaBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key used for private endpoints.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables verbose logging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Overrides the base URL of a partition (testing seam).
    pub fn url_override(mut self, partition: impl Into<String>, url: impl Into<String>) -> Self {
        self.url_overrides.push((partition.into(), url.into()));
        self
    }

    /// Injects a custom transport instead of the default HTTP client.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the adapter.
    pub fn build(self) -> Result<Bitpanda> {
        let mut config = ExchangeConfig::builder().id("bitpanda").name("Bitpanda Pro");
        if let Some(api_key) = self.api_key {
            config = config.api_key(api_key);
        }
        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        config = config.verbose(self.verbose);
        for (partition, url) in self.url_overrides {
            config = config.url_override(partition, url);
        }
        let config = config.build();

        match self.transport {
            Some(transport) => Ok(Bitpanda::with_transport(config, transport)),
            None => Bitpanda::new(config),
        }
    }
}
