//! Bitpanda Pro exchange adapter.
//!
//! Exposes the exchange's trading instruments, market data, and order
//! request surface through the vendor-neutral schema from `bitpanda-core`,
//! so it can be used interchangeably with adapters for other venues.
//!
//! # Example
//!
//! ```rust,no_run
//! use bitpanda::Bitpanda;
//!
//! # async fn example() -> bitpanda_core::Result<()> {
//! let exchange = Bitpanda::builder().api_key("your-api-key").build()?;
//!
//! let server_time = exchange.fetch_time().await?;
//! let markets = exchange.fetch_markets().await?;
//! println!("{} markets as of {}", markets.len(), server_time);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod builder;
pub mod constants;
pub mod fees;
pub mod parser;
pub mod rest;
mod sign;
pub mod urls;

pub use builder::BitpandaBuilder;
pub use fees::{FeeTier, TradingFees};
pub use urls::BitpandaUrls;

use bitpanda_core::{
    CurrencyCodeMap, ExchangeConfig, HttpClient, HttpConfig, Result, Transport,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Bitpanda Pro exchange adapter.
///
/// Holds immutable configuration and the injected transport; all operations
/// borrow `self` immutably, so an instance can be shared across tasks.
#[derive(Clone)]
pub struct Bitpanda {
    config: ExchangeConfig,
    transport: Arc<dyn Transport>,
    currencies: CurrencyCodeMap,
}

impl std::fmt::Debug for Bitpanda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitpanda")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Bitpanda {
    /// Creates a new instance using the builder pattern.
    ///
    /// This is the recommended way to create an instance.
    pub fn builder() -> BitpandaBuilder {
        BitpandaBuilder::new()
    }

    /// Creates a new instance with the default HTTP transport.
    pub fn new(config: ExchangeConfig) -> Result<Self> {
        let http_config = HttpConfig {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| HttpConfig::default().user_agent),
        };
        let transport = Arc::new(HttpClient::new(http_config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a new instance with an injected transport.
    ///
    /// The seam used by tests and by callers that bring their own rate
    /// limiting or retry behavior.
    pub fn with_transport(config: ExchangeConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            currencies: CurrencyCodeMap::with_defaults(),
        }
    }

    /// Returns the exchange configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns the currency code canonicalizer.
    pub fn currencies(&self) -> &CurrencyCodeMap {
        &self.currencies
    }

    /// Returns the exchange ID.
    pub fn id(&self) -> &str {
        "bitpanda"
    }

    /// Returns the exchange name.
    pub fn name(&self) -> &str {
        "Bitpanda Pro"
    }

    /// Returns the API version.
    pub fn version(&self) -> &str {
        constants::API_VERSION
    }

    /// Returns the countries of operation.
    pub fn countries(&self) -> &[&str] {
        constants::COUNTRIES
    }

    /// Returns the minimum spacing between requests, in milliseconds.
    pub fn rate_limit_ms(&self) -> u64 {
        constants::RATE_LIMIT_MS
    }

    /// Returns the supported timeframes (unified code → exchange code).
    pub fn timeframes(&self) -> HashMap<String, String> {
        constants::TIMEFRAMES
            .iter()
            .map(|(unified, native)| ((*unified).to_string(), (*native).to_string()))
            .collect()
    }

    /// Returns the published trading fee schedule.
    pub fn fees(&self) -> TradingFees {
        TradingFees::bitpanda()
    }

    /// Returns the API URLs, with any configured overrides applied.
    pub fn urls(&self) -> BitpandaUrls {
        let mut urls = BitpandaUrls::production();
        if let Some(public) = self.config.url_overrides.get("public") {
            urls.public = public.clone();
        }
        if let Some(private) = self.config.url_overrides.get("private") {
            urls.private = private.clone();
        }
        urls
    }
}
