//! Market type definitions.
//!
//! [`Market`] is the canonical record for a trading pair: the vendor-neutral
//! representation unifying this exchange's instrument naming with other
//! adapters' naming.

use super::MinMax;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Market precision settings, as decimal-place counts (not tick sizes).
///
/// `None` means the exchange did not publish the precision; `Some(0)` means
/// integer-only values. The two are semantically distinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketPrecision {
    /// Amount precision (decimal places).
    pub amount: Option<u32>,
    /// Price precision (decimal places).
    pub price: Option<u32>,
}

/// Market limits for order parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketLimits {
    /// Amount limits.
    pub amount: MinMax,
    /// Price limits.
    pub price: MinMax,
    /// Cost (amount * price) limits.
    pub cost: MinMax,
}

/// Canonical record for a trading pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    /// Exchange-native market identifier (e.g. "BTC_EUR").
    pub id: String,

    /// Unified symbol (e.g. "BTC/EUR").
    pub symbol: String,

    /// Canonical base currency code.
    pub base: String,

    /// Canonical quote currency code.
    pub quote: String,

    /// Exchange-native base currency code, preserved verbatim for
    /// round-tripping into requests.
    pub base_id: String,

    /// Exchange-native quote currency code, preserved verbatim.
    pub quote_id: String,

    /// Precision settings.
    pub precision: MarketPrecision,

    /// Limits for orders.
    pub limits: MarketLimits,

    /// Whether the market is open for trading.
    pub active: bool,

    /// Raw exchange info, untouched, for diagnostics.
    #[serde(flatten)]
    pub info: HashMap<String, Value>,
}

impl Default for Market {
    fn default() -> Self {
        Self {
            id: String::new(),
            symbol: String::new(),
            base: String::new(),
            quote: String::new(),
            base_id: String::new(),
            quote_id: String::new(),
            precision: MarketPrecision::default(),
            limits: MarketLimits::default(),
            active: false,
            info: HashMap::new(),
        }
    }
}

impl Market {
    /// Returns the raw exchange record as a JSON value.
    pub fn info_value(&self) -> Value {
        Value::Object(
            self.info
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}
