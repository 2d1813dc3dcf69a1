//! Cache Key Module
//!
//! Deterministic cache keys derived from an operation name and its parameters.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{OrchestratorError, Result};

// == Cache Key ==
/// Canonical key for one logical request.
///
/// Rendered as `<operation>:<canonical json>` where every JSON object has its
/// keys sorted, so logically identical parameters always produce the same key
/// regardless of field or map insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from an operation name and serializable parameters.
    pub fn new<P: Serialize + ?Sized>(operation: &str, params: &P) -> Result<Self> {
        let value = serde_json::to_value(params).map_err(|e| {
            OrchestratorError::Internal(format!("Unable to serialize cache key params: {}", e))
        })?;

        let mut key = String::with_capacity(operation.len() + 64);
        key.push_str(operation);
        key.push(':');
        write_canonical(&value, &mut key);
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes `value` as compact JSON with object keys in sorted order.
///
/// Sorting is done here rather than relying on `serde_json::Map` ordering,
/// which changes when the `preserve_order` feature is enabled anywhere in the
/// dependency graph.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(k.clone()).to_string());
                out.push(':');
                write_canonical(&map[k.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_key_includes_operation() {
        let key = CacheKey::new("lessonPlan", &json!({"subject": "Tamil"})).unwrap();
        assert_eq!(key.as_str(), r#"lessonPlan:{"subject":"Tamil"}"#);
    }

    #[test]
    fn test_key_sorts_nested_objects() {
        let key = CacheKey::new("x", &json!({"b": {"z": 1, "a": [{"d": 2, "c": 3}]}, "a": null}))
            .unwrap();
        assert_eq!(key.as_str(), r#"x:{"a":null,"b":{"a":[{"c":3,"d":2}],"z":1}}"#);
    }

    #[test]
    fn test_key_stable_for_hash_maps() {
        let mut first = HashMap::new();
        let mut second = HashMap::new();
        for (k, v) in [("grade", "Grade 3"), ("subject", "Tamil"), ("topic", "Poems")] {
            first.insert(k, v);
        }
        for (k, v) in [("topic", "Poems"), ("subject", "Tamil"), ("grade", "Grade 3")] {
            second.insert(k, v);
        }
        assert_eq!(
            CacheKey::new("lessonPlan", &first).unwrap(),
            CacheKey::new("lessonPlan", &second).unwrap()
        );
    }

    #[test]
    fn test_different_operations_differ() {
        let params = json!({"grade": "Grade 3"});
        assert_ne!(
            CacheKey::new("lessonPlan", &params).unwrap(),
            CacheKey::new("visualizations", &params).unwrap()
        );
    }

    #[test]
    fn test_strings_are_escaped() {
        let key = CacheKey::new("x", &json!({"q\"uote": "line\nbreak"})).unwrap();
        assert_eq!(key.to_string(), r#"x:{"q\"uote":"line\nbreak"}"#);
    }

    #[test]
    fn test_unserializable_params_rejected() {
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);
        assert!(matches!(
            CacheKey::new("x", &bad),
            Err(OrchestratorError::Internal(_))
        ));
    }
}
