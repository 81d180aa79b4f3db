//! Instrument-list normalization.
//!
//! Turns the exchange's raw instrument records into canonical [`Market`]
//! records. The transformation is pure and order-preserving: one output per
//! input, inactive markets included. Only a missing base or quote currency
//! code is an error; a caller indexing by symbol must be able to trust
//! completeness, so a malformed record fails the whole batch instead of
//! being dropped silently. Everything else degrades to `None`/`false`.

use bitpanda_core::{
    error::ParseError,
    parser_utils::{safe_decimal, safe_object, safe_precision, safe_string, value_to_hashmap},
    types::MinMax,
    CodeCanonicalizer, Market, MarketLimits, MarketPrecision, Result,
};
use serde_json::Value;

/// Instrument state string the exchange uses for tradeable markets.
///
/// Comparison is case-sensitive; any other value, including states added by
/// the exchange later, maps to inactive rather than an error.
const STATE_ACTIVE: &str = "ACTIVE";

/// Parse one raw instrument into a canonical market.
pub fn parse_market(data: &Value, currencies: &dyn CodeCanonicalizer) -> Result<Market> {
    let base_id = safe_object(data, "base")
        .and_then(|asset| safe_string(asset, "code"))
        .ok_or_else(|| ParseError::missing_field("base.code"))?;
    let quote_id = safe_object(data, "quote")
        .and_then(|asset| safe_string(asset, "code"))
        .ok_or_else(|| ParseError::missing_field("quote.code"))?;

    // The exchange-native id keeps the codes verbatim; only the unified
    // symbol goes through canonicalization.
    let id = format!("{}_{}", base_id, quote_id);
    let base = currencies.canonical_code(&base_id);
    let quote = currencies.canonical_code(&quote_id);
    let symbol = format!("{}/{}", base, quote);

    let precision = MarketPrecision {
        amount: safe_precision(data, "amount_precision"),
        price: safe_precision(data, "market_precision"),
    };

    let limits = MarketLimits {
        amount: MinMax::default(),
        price: MinMax::default(),
        cost: MinMax {
            min: safe_decimal(data, "min_size"),
            max: None,
        },
    };

    let active = safe_string(data, "state").as_deref() == Some(STATE_ACTIVE);

    Ok(Market {
        id,
        symbol,
        base,
        quote,
        base_id,
        quote_id,
        precision,
        limits,
        active,
        info: value_to_hashmap(data),
    })
}

/// Parse the raw instrument list, preserving order and cardinality.
///
/// Returns an error (and no partial output) if any record is malformed.
pub fn parse_markets(data: &Value, currencies: &dyn CodeCanonicalizer) -> Result<Vec<Market>> {
    let records = data
        .as_array()
        .ok_or_else(|| ParseError::invalid_value("instruments", "expected an array"))?;

    records
        .iter()
        .map(|record| parse_market(record, currencies))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitpanda_core::CurrencyCodeMap;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn currencies() -> CurrencyCodeMap {
        CurrencyCodeMap::with_defaults()
    }

    fn eth_chf() -> Value {
        json!({
            "state": "ACTIVE",
            "base": {"code": "ETH", "precision": 8},
            "quote": {"code": "CHF", "precision": 2},
            "amount_precision": 4,
            "market_precision": 2,
            "min_size": "10.0"
        })
    }

    #[test]
    fn test_parse_market_end_to_end() {
        let market = parse_market(&eth_chf(), &currencies()).unwrap();

        assert_eq!(market.id, "ETH_CHF");
        assert_eq!(market.symbol, "ETH/CHF");
        assert_eq!(market.base, "ETH");
        assert_eq!(market.quote, "CHF");
        assert_eq!(market.base_id, "ETH");
        assert_eq!(market.quote_id, "CHF");
        assert_eq!(market.precision.amount, Some(4));
        assert_eq!(market.precision.price, Some(2));
        assert_eq!(market.limits.amount.min, None);
        assert_eq!(market.limits.amount.max, None);
        assert_eq!(market.limits.price.min, None);
        assert_eq!(market.limits.price.max, None);
        assert_eq!(market.limits.cost.min, Some(dec!(10.0)));
        assert_eq!(market.limits.cost.max, None);
        assert!(market.active);
        assert_eq!(market.info.get("state"), Some(&json!("ACTIVE")));
    }

    #[test]
    fn test_id_keeps_native_codes_verbatim() {
        let raw = json!({
            "state": "ACTIVE",
            "base": {"code": "miota"},
            "quote": {"code": "XBT"}
        });
        let market = parse_market(&raw, &currencies()).unwrap();
        // Canonicalization applies to symbol only, never to the native id.
        assert_eq!(market.id, "miota_XBT");
        assert_eq!(market.base_id, "miota");
        assert_eq!(market.quote_id, "XBT");
        assert_eq!(market.symbol, "IOTA/BTC");
    }

    #[test]
    fn test_active_is_case_sensitive() {
        for state in ["active", "Active", "SUSPENDED", "MAINTENANCE", ""] {
            let mut raw = eth_chf();
            raw["state"] = json!(state);
            let market = parse_market(&raw, &currencies()).unwrap();
            assert!(!market.active, "state {state:?} must not be active");
        }
    }

    #[test]
    fn test_missing_state_is_inactive_not_error() {
        let mut raw = eth_chf();
        raw.as_object_mut().unwrap().remove("state");
        let market = parse_market(&raw, &currencies()).unwrap();
        assert!(!market.active);
    }

    #[test]
    fn test_missing_precision_is_none_and_zero_is_kept() {
        let mut raw = eth_chf();
        raw.as_object_mut().unwrap().remove("market_precision");
        raw["amount_precision"] = json!(0);
        let market = parse_market(&raw, &currencies()).unwrap();
        assert_eq!(market.precision.amount, Some(0));
        assert_eq!(market.precision.price, None);
    }

    #[test]
    fn test_unparseable_min_size_degrades_to_none() {
        let mut raw = eth_chf();
        raw["min_size"] = json!("n/a");
        let market = parse_market(&raw, &currencies()).unwrap();
        assert_eq!(market.limits.cost.min, None);
    }

    #[test]
    fn test_missing_base_code_fails() {
        let raw = json!({
            "state": "ACTIVE",
            "base": {"precision": 8},
            "quote": {"code": "EUR"}
        });
        let err = parse_market(&raw, &currencies()).unwrap_err();
        assert!(err.to_string().contains("base.code"));
    }

    #[test]
    fn test_empty_quote_code_fails() {
        let raw = json!({
            "state": "ACTIVE",
            "base": {"code": "BTC"},
            "quote": {"code": ""}
        });
        let err = parse_market(&raw, &currencies()).unwrap_err();
        assert!(err.to_string().contains("quote.code"));
    }

    #[test]
    fn test_batch_preserves_order_and_includes_inactive() {
        let raw = json!([
            {"state": "ACTIVE", "base": {"code": "BTC"}, "quote": {"code": "EUR"}},
            {"state": "SUSPENDED", "base": {"code": "ETH"}, "quote": {"code": "EUR"}},
            {"state": "ACTIVE", "base": {"code": "XRP"}, "quote": {"code": "EUR"}},
        ]);
        let markets = parse_markets(&raw, &currencies()).unwrap();
        assert_eq!(markets.len(), 3);
        assert_eq!(markets[0].id, "BTC_EUR");
        assert_eq!(markets[1].id, "ETH_EUR");
        assert!(!markets[1].active);
        assert_eq!(markets[2].id, "XRP_EUR");
    }

    #[test]
    fn test_one_malformed_record_fails_the_whole_batch() {
        let raw = json!([
            {"state": "ACTIVE", "base": {"code": "BTC"}, "quote": {"code": "EUR"}},
            {"state": "ACTIVE", "base": {}, "quote": {"code": "EUR"}},
        ]);
        assert!(parse_markets(&raw, &currencies()).is_err());
    }

    #[test]
    fn test_renormalizing_info_is_idempotent() {
        let first = parse_market(&eth_chf(), &currencies()).unwrap();
        let second = parse_market(&first.info_value(), &currencies()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_array_payload_fails() {
        let raw = json!({"error": "MAINTENANCE"});
        assert!(parse_markets(&raw, &currencies()).is_err());
    }
}
