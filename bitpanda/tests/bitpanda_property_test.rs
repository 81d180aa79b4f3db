//! Property-based tests for instrument normalization.

use bitpanda::parser::{parse_market, parse_markets};
use bitpanda_core::{CodeCanonicalizer, CurrencyCodeMap};
use proptest::prelude::*;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct RawInstrument {
    base: String,
    quote: String,
    state: String,
    amount_precision: Option<u32>,
    market_precision: Option<u32>,
    min_size: Option<String>,
}

impl RawInstrument {
    fn to_json(&self) -> Value {
        let mut record = json!({
            "state": self.state,
            "base": {"code": self.base, "precision": 8},
            "quote": {"code": self.quote, "precision": 2},
        });
        if let Some(p) = self.amount_precision {
            record["amount_precision"] = json!(p);
        }
        if let Some(p) = self.market_precision {
            record["market_precision"] = json!(p);
        }
        if let Some(s) = &self.min_size {
            record["min_size"] = json!(s);
        }
        record
    }
}

fn currency_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2,6}").unwrap()
}

fn instrument_state() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ACTIVE".to_string()),
        Just("SUSPENDED".to_string()),
        Just("MAINTENANCE".to_string()),
        Just("active".to_string()),
        Just("DELISTED".to_string()),
    ]
}

fn raw_instrument() -> impl Strategy<Value = RawInstrument> {
    (
        currency_code(),
        currency_code(),
        instrument_state(),
        prop::option::of(0u32..12),
        prop::option::of(0u32..12),
        prop::option::of((1u64..10_000_000).prop_map(|v| format!("{}.{}", v / 10, v % 10))),
    )
        .prop_map(
            |(base, quote, state, amount_precision, market_precision, min_size)| RawInstrument {
                base,
                quote,
                state,
                amount_precision,
                market_precision,
                min_size,
            },
        )
}

proptest! {
    #[test]
    fn normalization_preserves_length_and_order(instruments in prop::collection::vec(raw_instrument(), 0..20)) {
        let currencies = CurrencyCodeMap::with_defaults();
        let payload = Value::Array(instruments.iter().map(RawInstrument::to_json).collect());

        let markets = parse_markets(&payload, &currencies).unwrap();
        prop_assert_eq!(markets.len(), instruments.len());

        for (raw, market) in instruments.iter().zip(&markets) {
            prop_assert_eq!(&market.id, &format!("{}_{}", raw.base, raw.quote));
            prop_assert_eq!(&market.base_id, &raw.base);
            prop_assert_eq!(&market.quote_id, &raw.quote);
        }
    }

    #[test]
    fn symbol_is_derived_from_canonical_codes(raw in raw_instrument()) {
        let currencies = CurrencyCodeMap::with_defaults();
        let market = parse_market(&raw.to_json(), &currencies).unwrap();

        let expected = format!(
            "{}/{}",
            currencies.canonical_code(&raw.base),
            currencies.canonical_code(&raw.quote)
        );
        prop_assert_eq!(&market.symbol, &expected);
        prop_assert_eq!(&market.base, &currencies.canonical_code(&raw.base));
        prop_assert_eq!(&market.quote, &currencies.canonical_code(&raw.quote));
    }

    #[test]
    fn active_iff_state_is_exactly_active(raw in raw_instrument()) {
        let currencies = CurrencyCodeMap::with_defaults();
        let market = parse_market(&raw.to_json(), &currencies).unwrap();
        prop_assert_eq!(market.active, raw.state == "ACTIVE");
    }

    #[test]
    fn precision_absence_is_distinct_from_zero(raw in raw_instrument()) {
        let currencies = CurrencyCodeMap::with_defaults();
        let market = parse_market(&raw.to_json(), &currencies).unwrap();
        prop_assert_eq!(market.precision.amount, raw.amount_precision);
        prop_assert_eq!(market.precision.price, raw.market_precision);
    }

    #[test]
    fn renormalizing_info_reproduces_the_record(raw in raw_instrument()) {
        let currencies = CurrencyCodeMap::with_defaults();
        let first = parse_market(&raw.to_json(), &currencies).unwrap();
        let second = parse_market(&first.info_value(), &currencies).unwrap();
        prop_assert_eq!(first, second);
    }
}
