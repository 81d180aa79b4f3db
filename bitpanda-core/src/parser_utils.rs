//! Safe accessors for loosely-typed exchange JSON.
//!
//! Exchange payloads drift over time: fields appear, disappear, and switch
//! between string and number encodings. Each accessor returns `Option` and
//! degrades to `None` on absence or type mismatch instead of failing, so the
//! caller decides which fields are contract-critical.

use rust_decimal::prelude::{FromPrimitive, FromStr};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

/// Extract a string field. Absent, non-string, or empty values yield `None`.
///
/// Empty strings are collapsed to `None` on purpose: an empty currency code
/// is as useless as a missing one.
pub fn safe_string(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Extract an integer field (accepts both number and numeric-string forms).
pub fn safe_integer(data: &Value, key: &str) -> Option<i64> {
    data.get(key).and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_str().and_then(|s| s.parse::<i64>().ok()))
    })
}

/// Extract a non-negative integer field as `u32`.
///
/// Used for decimal-place counts; zero is a meaningful value (integer-only
/// amounts) and is preserved, unlike absence which yields `None`.
pub fn safe_precision(data: &Value, key: &str) -> Option<u32> {
    safe_integer(data, key).and_then(|v| u32::try_from(v).ok())
}

/// Extract a `Decimal` field (supports both string and number formats).
///
/// Empty or non-numeric strings yield `None`.
pub fn safe_decimal(data: &Value, key: &str) -> Option<Decimal> {
    data.get(key).and_then(|v| {
        if let Some(num) = v.as_f64() {
            Decimal::from_f64(num)
        } else if let Some(s) = v.as_str() {
            if s.is_empty() {
                None
            } else {
                Decimal::from_str(s).ok()
            }
        } else {
            None
        }
    })
}

/// Extract a nested object field.
pub fn safe_object<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| v.is_object())
}

/// Convert a JSON `Value` into a `HashMap<String, Value>`.
pub fn value_to_hashmap(data: &Value) -> HashMap<String, Value> {
    data.as_object()
        .map(|obj| obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}
