//! Lenient accessors over raw `serde_json::Value` documents.
//!
//! Adapters read externally produced trees whose optional fields may be missing or
//! carry the wrong shape; these helpers turn both cases into `None`.

use serde_json::Value;

/// The first present, non-null field among `keys`.
pub fn field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find(|v| !v.is_null())
}

pub fn str_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    field(value, keys).and_then(Value::as_str)
}

pub fn bool_field(value: &Value, keys: &[&str]) -> Option<bool> {
    field(value, keys).and_then(Value::as_bool)
}

/// The node's `type` tag, or `""` when absent.
pub fn type_tag(value: &Value) -> &str {
    str_field(value, &["type"]).unwrap_or("")
}

/// Scalar JSON rendered as source text: strings verbatim, numbers and booleans
/// through their JSON form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
