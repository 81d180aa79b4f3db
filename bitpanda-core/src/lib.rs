//! Core library for the Bitpanda Pro exchange adapter.
//!
//! Provides the machinery shared by any exchange adapter built on top of it:
//! typed errors, the HTTP transport seam, safe JSON field accessors, currency
//! code canonicalization, and the canonical market data model.
//!
//! # Features
//!
//! - **Type Safety**: strongly-typed errors with `thiserror`, `Decimal` for
//!   monetary values
//! - **Composition over inheritance**: adapters depend on the narrow
//!   [`Transport`] and [`Signer`] traits rather than a base class
//! - **Async/Await**: transport built on tokio + reqwest
//!
//! # Example
//!
//! ```rust
//! use bitpanda_core::prelude::*;
//!
//! let config = ExchangeConfig::builder()
//!     .id("bitpanda")
//!     .api_key("your-api-key")
//!     .build();
//! assert_eq!(config.id, "bitpanda");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

// Re-exports of external dependencies
pub use rust_decimal;
pub use serde;
pub use serde_json;

pub mod config;
pub mod credentials;
pub mod currency;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod parser_utils;
pub mod request;
pub mod time;
pub mod transport;
pub mod types;

pub use config::{ExchangeConfig, ExchangeConfigBuilder};
pub use credentials::SecretString;
pub use currency::{CodeCanonicalizer, CurrencyCodeMap};
pub use error::{Error, NetworkError, ParseError, RequestError, Result};
pub use http_client::{HttpClient, HttpConfig};
pub use request::{HttpMethod, Params, RequestDescriptor};
pub use transport::{Signer, Transport};
pub use types::{EndpointType, Market, MarketLimits, MarketPrecision, MinMax};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ExchangeConfig, ExchangeConfigBuilder};
    pub use crate::credentials::SecretString;
    pub use crate::currency::{CodeCanonicalizer, CurrencyCodeMap};
    pub use crate::error::{Error, Result};
    pub use crate::http_client::{HttpClient, HttpConfig};
    pub use crate::logging::{init_logging, try_init_logging, LogConfig, LogFormat, LogLevel};
    pub use crate::request::{HttpMethod, Params, RequestDescriptor};
    pub use crate::time::{iso8601, milliseconds, parse_iso8601, seconds};
    pub use crate::transport::{Signer, Transport};
    pub use crate::types::{EndpointType, Market, MarketLimits, MarketPrecision, MinMax};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
