//! Bitpanda Pro API constants.
//!
//! Endpoint path templates, the supported timeframe table, and other fixed
//! strings. Path templates use `{name}` placeholders resolved at request
//! time.

/// API version segment.
pub const API_VERSION: &str = "v1";

/// Minimum spacing between requests, in milliseconds.
pub const RATE_LIMIT_MS: u64 = 300;

/// Countries of operation (ISO 3166-1 alpha-2).
pub const COUNTRIES: &[&str] = &["AT"];

/// API endpoints, grouped by partition and verb.
pub mod endpoints {
    /// Public GET endpoints.
    pub mod public {
        /// Tradeable currency list.
        pub const CURRENCIES: &str = "currencies";
        /// Candlestick history for one instrument.
        pub const CANDLESTICKS: &str = "candlesticks/{instrument_code}";
        /// Exchange-wide fee schedule.
        pub const FEES: &str = "fees";
        /// Tradeable instrument list.
        pub const INSTRUMENTS: &str = "instruments";
        /// Order book snapshot for one instrument.
        pub const ORDER_BOOK: &str = "order-book/{instrument_code}";
        /// Ticker for all instruments.
        pub const MARKET_TICKER: &str = "market-ticker";
        /// Ticker for one instrument.
        pub const MARKET_TICKER_INSTRUMENT: &str = "market-ticker/{instrument_code}";
        /// Trade history for one instrument.
        pub const PRICE_TICKS: &str = "price-ticks/{instrument_code}";
        /// Server time.
        pub const TIME: &str = "time";
    }

    /// Private GET endpoints.
    pub mod private_get {
        /// Account balances.
        pub const BALANCES: &str = "account/balances";
        /// Crypto deposit address for one currency.
        pub const DEPOSIT_CRYPTO: &str = "account/deposit/crypto/{currency_code}";
        /// Fiat (EUR) deposit details.
        pub const DEPOSIT_FIAT_EUR: &str = "account/deposit/fiat/EUR";
        /// Deposit history.
        pub const DEPOSITS: &str = "account/deposits";
        /// Deposit history (Bitpanda broker transfers).
        pub const DEPOSITS_BITPANDA: &str = "account/deposits/bitpanda";
        /// Withdrawal history.
        pub const WITHDRAWALS: &str = "account/withdrawals";
        /// Withdrawal history (Bitpanda broker transfers).
        pub const WITHDRAWALS_BITPANDA: &str = "account/withdrawals/bitpanda";
        /// Account fee tier.
        pub const FEES: &str = "account/fees";
        /// Open and historical orders.
        pub const ORDERS: &str = "account/orders";
        /// One order by identifier.
        pub const ORDER: &str = "account/orders/{order_id}";
        /// Trades belonging to one order.
        pub const ORDER_TRADES: &str = "account/orders/{order_id}/trades";
        /// Trade history.
        pub const TRADES: &str = "account/trades";
        /// One trade by identifier.
        pub const TRADE: &str = "account/trades/{trade_id}";
        /// 30-day trading volume.
        pub const TRADING_VOLUME: &str = "account/trading-volume";
    }

    /// Private POST endpoints.
    pub mod private_post {
        /// Create a crypto deposit address.
        pub const DEPOSIT_CRYPTO: &str = "account/deposit/crypto";
        /// Withdraw crypto.
        pub const WITHDRAW_CRYPTO: &str = "account/withdraw/crypto";
        /// Withdraw fiat.
        pub const WITHDRAW_FIAT: &str = "account/withdraw/fiat";
        /// Toggle fee collection options.
        pub const FEES: &str = "account/fees";
        /// Place an order.
        pub const ORDERS: &str = "account/orders";
    }

    /// Private DELETE endpoints.
    pub mod private_delete {
        /// Cancel all orders (optionally filtered by instrument).
        pub const ORDERS: &str = "account/orders";
        /// Cancel one order by identifier.
        pub const ORDER: &str = "account/orders/{order_id}";
        /// Cancel one order by client identifier.
        pub const ORDER_BY_CLIENT_ID: &str = "account/orders/client/{client_id}";
    }
}

/// Supported timeframes: unified code → exchange code.
pub const TIMEFRAMES: &[(&str, &str)] = &[
    ("1m", "1m"),
    ("3m", "3m"),
    ("5m", "5m"),
    ("15m", "15m"),
    ("30m", "30m"),
    ("1h", "1h"),
    ("2h", "2h"),
    ("4h", "4h"),
    ("6h", "6h"),
    ("8h", "8h"),
    ("12h", "12h"),
    ("1d", "1d"),
    ("3d", "3d"),
    ("1w", "1w"),
    ("1M", "1M"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_table_is_identity_mapped() {
        assert_eq!(TIMEFRAMES.len(), 15);
        for (unified, native) in TIMEFRAMES {
            assert_eq!(unified, native);
        }
    }

    #[test]
    fn test_templated_endpoints_carry_placeholders() {
        assert!(endpoints::public::CANDLESTICKS.contains("{instrument_code}"));
        assert!(endpoints::private_get::ORDER.contains("{order_id}"));
        assert!(endpoints::private_delete::ORDER_BY_CLIENT_ID.contains("{client_id}"));
    }
}
