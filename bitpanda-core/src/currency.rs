//! Currency code canonicalization.
//!
//! Exchanges occasionally list assets under legacy or nonstandard tickers.
//! The canonicalizer maps exchange-native codes onto the unified codes shared
//! by all adapters, so `XBT` on one venue and `BTC` on another produce the
//! same unified symbol.

use std::collections::HashMap;

/// Maps exchange-native currency codes to unified codes.
///
/// Implementations must be idempotent: canonicalizing an already-canonical
/// code returns it unchanged.
pub trait CodeCanonicalizer: Send + Sync {
    /// Returns the unified code for an exchange-native code.
    fn canonical_code(&self, code: &str) -> String;
}

/// Static alias-table canonicalizer.
///
/// Unknown codes pass through upper-cased; known renamed tokens are mapped
/// through the alias table.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCodeMap {
    aliases: HashMap<&'static str, &'static str>,
}

impl CurrencyCodeMap {
    /// Creates an empty map (pure upper-casing passthrough).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map preloaded with the aliases in common use across venues.
    pub fn with_defaults() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert("XBT", "BTC");
        aliases.insert("BCC", "BCH");
        aliases.insert("DRK", "DASH");
        aliases.insert("MIOTA", "IOTA");
        Self { aliases }
    }

    /// Adds or replaces an alias.
    pub fn insert(&mut self, from: &'static str, to: &'static str) {
        self.aliases.insert(from, to);
    }
}

impl CodeCanonicalizer for CurrencyCodeMap {
    fn canonical_code(&self, code: &str) -> String {
        let upper = code.to_uppercase();
        match self.aliases.get(upper.as_str()) {
            Some(mapped) => (*mapped).to_string(),
            None => upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_for_canonical_codes() {
        let map = CurrencyCodeMap::with_defaults();
        assert_eq!(map.canonical_code("BTC"), "BTC");
        assert_eq!(map.canonical_code("CHF"), "CHF");
    }

    #[test]
    fn test_uppercasing() {
        let map = CurrencyCodeMap::with_defaults();
        assert_eq!(map.canonical_code("eth"), "ETH");
    }

    #[test]
    fn test_alias_mapping() {
        let map = CurrencyCodeMap::with_defaults();
        assert_eq!(map.canonical_code("XBT"), "BTC");
        assert_eq!(map.canonical_code("MIOTA"), "IOTA");
    }

    #[test]
    fn test_idempotence() {
        let map = CurrencyCodeMap::with_defaults();
        for code in ["XBT", "btc", "MIOTA", "weird"] {
            let once = map.canonical_code(code);
            let twice = map.canonical_code(&once);
            assert_eq!(once, twice);
        }
    }
}
