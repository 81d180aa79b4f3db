//! Core type definitions.
//!
//! The canonical, vendor-neutral data structures shared by all adapters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod endpoint;
pub mod market;

pub use endpoint::EndpointType;
pub use market::{Market, MarketLimits, MarketPrecision};

/// Type alias for timestamps (milliseconds since Unix epoch).
pub type Timestamp = i64;

/// Type alias for unified trading symbols (e.g. "BTC/EUR").
pub type Symbol = String;

/// An optional lower/upper bound pair.
///
/// `None` means the exchange publishes no bound, which is distinct from a
/// bound of zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MinMax {
    /// Lower bound.
    pub min: Option<Decimal>,
    /// Upper bound.
    pub max: Option<Decimal>,
}

impl MinMax {
    /// A bound pair with only a minimum.
    pub fn min(min: Decimal) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }
}
