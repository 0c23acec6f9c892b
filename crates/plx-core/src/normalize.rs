//! Canonical, order-independent value encoding used as the engine's equality key.

use serde::Serialize;
use serde_json::Value;

use crate::errors::{EngineError, ErrorInfo};

/// Produces a canonical textual encoding of `value` such that two values
/// encode identically iff they are considered equal for comparison purposes.
///
/// Scalars use their plain string form, arrays are encoded with their
/// normalized elements sorted lexicographically (element order never affects
/// equality), and objects are encoded with keys sorted lexicographically.
/// The function is total: every JSON value maps to exactly one string and no
/// input can make it fail. Circular structures cannot be expressed in
/// [`Value`], so cycle handling is out of scope.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => {
            let mut encoded: Vec<String> = items.iter().map(normalize).collect();
            encoded.sort();
            format!("[{}]", encoded.join(","))
        }
        Value::Object(fields) => {
            // serde_json's default map iterates keys in sorted order already.
            let mut encoded: Vec<(String, String)> = fields
                .iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect();
            encoded.sort();
            let body: Vec<String> = encoded
                .into_iter()
                .map(|(key, value)| format!("{key}:{value}"))
                .collect();
            format!("{{{}}}", body.join(","))
        }
    }
}

/// Normalizes an optional value, mapping an absent field to the `"null"`
/// token so that absent and explicit-null fields compare equal.
pub fn normalize_opt(value: Option<&Value>) -> String {
    match value {
        Some(value) => normalize(value),
        None => "null".to_string(),
    }
}

/// Encodes a serializable payload as compact JSON with lexicographically
/// sorted object keys, suitable for stable digests and memo keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, EngineError> {
    let tree = serde_json::to_value(value).map_err(|err| {
        EngineError::Serde(
            ErrorInfo::new("canonical-encode", "failed to convert payload to a JSON tree")
                .with_hint(err.to_string()),
        )
    })?;
    serde_json::to_vec(&tree).map_err(|err| {
        EngineError::Serde(
            ErrorInfo::new("canonical-serialize", "failed to serialize canonical JSON")
                .with_hint(err.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_use_plain_form() {
        assert_eq!(normalize(&json!(null)), "null");
        assert_eq!(normalize(&json!(true)), "true");
        assert_eq!(normalize(&json!(1.5)), "1.5");
        assert_eq!(normalize(&json!("abc")), "abc");
    }

    #[test]
    fn array_order_is_irrelevant() {
        assert_eq!(normalize(&json!([3, 1, 2])), normalize(&json!([1, 2, 3])));
        assert_eq!(normalize(&json!([1, 2, 3])), "[1,2,3]");
    }

    #[test]
    fn object_keys_are_sorted() {
        assert_eq!(
            normalize(&json!({"b": 1, "a": {"d": 2, "c": 3}})),
            "{a:{c:3,d:2},b:1}"
        );
    }

    #[test]
    fn absent_equals_explicit_null() {
        assert_eq!(normalize_opt(None), normalize_opt(Some(&Value::Null)));
    }
}
