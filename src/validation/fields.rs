//! Required Field Validation

use serde_json::Value;

/// True iff `value` is an object carrying every field in `required`, non-empty.
pub fn validate(value: &Value, required: &[&str]) -> bool {
    missing_fields(value, required).is_empty()
}

/// Required fields that are absent or empty. Every field is missing when
/// `value` is not an object.
pub fn missing_fields<'a>(value: &Value, required: &[&'a str]) -> Vec<&'a str> {
    let Some(object) = value.as_object() else {
        return required.to_vec();
    };

    required
        .iter()
        .copied()
        .filter(|field| object.get(*field).map_or(true, is_empty))
        .collect()
}

/// Null, blank strings, and empty arrays or objects count as empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
