use crate::languages::json::{scalar_text, str_field};
use itertools::Itertools;
use serde_json::Value;
use std::cmp::Ordering;

/// The entries of an SPR section or body, in statement order.
///
/// Maps are keyed `expr<N>` and ordered by `N`, so `expr10` follows `expr9`. Keys
/// without a numeric suffix come last, in key order. Arrays are already ordered.
pub fn ordered_entries(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(map) => map
            .iter()
            .sorted_by(|(a, _), (b, _)| compare_keys(a, b))
            .map(|(_, entry)| entry)
            .collect(),
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    }
}

/// A statement body: an entry map, an array, a single typed statement, or a bare
/// string statement. Anything else is an empty block.
pub fn body_entries(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(v @ Value::String(_)) => vec![v],
        Some(v @ Value::Object(_)) if entry_type(v).is_some() => vec![v],
        Some(v) => ordered_entries(v),
        None => Vec::new(),
    }
}

/// The `type` tag of an object entry.
pub fn entry_type(value: &Value) -> Option<&str> {
    match value {
        Value::Object(_) => str_field(value, &["type"]),
        _ => None,
    }
}

/// Case labels, given as `"1, 2"`, `[1, 2]` or a scalar, rendered space-separated.
pub fn compare_value_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).map(|s| s.trim().to_string()).join(" "),
        Value::String(text) => text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .join(" "),
        other => scalar_text(other).unwrap_or_default(),
    }
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (expr_index(a), expr_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn expr_index(key: &str) -> Option<u64> {
    key.strip_prefix("expr")?.parse().ok()
}
