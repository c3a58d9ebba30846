//! Default-and-clamp readers for untrusted model output.
//!
//! Every reader accepts any [`Value`] (or none) and always produces a
//! usable value; wrong shapes fall back to the documented default.

use serde_json::Value;

use crate::domain::foundation::Percentage;

/// Looks up the first present, non-null key on an object.
///
/// Models sometimes answer in snake_case despite being asked for
/// camelCase, so callers pass both spellings.
pub fn pick<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = object.as_object()?;
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
}

/// Reads a number, accepting numeric strings such as `"42"` or `"42%"`.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// A 0-100 score: 50 when missing or non-numeric, then clamped.
pub fn score_or_midpoint(value: Option<&Value>) -> Percentage {
    number(value)
        .and_then(Percentage::from_f64_clamped)
        .unwrap_or(Percentage::MIDPOINT)
}

/// A non-negative whole count: 0 when missing, negative or non-numeric.
pub fn count_or_zero(value: Option<&Value>) -> u32 {
    number(value)
        .map(|n| n.round().clamp(0.0, f64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// A non-negative quantity (e.g. hours): 0 when missing, negative or non-numeric.
pub fn quantity_or_zero(value: Option<&Value>) -> f64 {
    number(value).filter(|n| *n > 0.0).unwrap_or(0.0)
}

/// Trimmed text: empty when missing or not a string.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Trimmed, non-empty string items of an array. Any other shape yields an
/// empty list; non-string items are skipped.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Object items of an array, in order. Any other shape yields nothing.
pub fn object_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().filter(|v| v.is_object()).collect(),
        _ => Vec::new(),
    }
}

/// Unwraps a single-key envelope such as `{"data": {...}}` or
/// `{"result": {...}}` that models occasionally add.
pub fn unwrap_envelope(raw: &Value) -> &Value {
    match raw.as_object() {
        Some(map) if map.len() == 1 => match map.iter().next() {
            Some((key, inner))
                if inner.is_object() && matches!(key.as_str(), "data" | "result" | "response") =>
            {
                inner
            }
            _ => raw,
        },
        _ => raw,
    }
}
