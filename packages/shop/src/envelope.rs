//! Normalization of the backend's response envelopes.
//!
//! The same logical resource arrives as `{"data": ..}`, `{"user": ..}`,
//! `{"products": [..]}`, `{"success": true, "data": {"order": ..}}` or bare. Every
//! decoder in the workspace goes through [`unwrap_envelope`] so downstream code only
//! ever sees the canonical typed value.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope keys tried for every resource, after the resource-specific ones.
pub const COMMON_KEYS: &[&str] = &["data", "result"];

const MAX_DEPTH: usize = 3;

/// Peel wrapper objects whose payload sits under one of `keys` (or a
/// [`COMMON_KEYS`] entry). Stops at the first value that is not such a wrapper.
pub fn unwrap_envelope(mut value: Value, keys: &[&str]) -> Value {
    for _ in 0..MAX_DEPTH {
        let Value::Object(ref mut map) = value else {
            return value;
        };
        let key = keys
            .iter()
            .chain(COMMON_KEYS)
            .find(|k| map.contains_key(**k))
            .copied();
        match key {
            Some(k) => value = map.remove(k).unwrap_or(Value::Null),
            None => return value,
        }
    }
    value
}

/// Decode a single resource; `null` after unwrapping means "absent".
pub fn decode_one<T: DeserializeOwned>(
    value: Value,
    keys: &[&str],
) -> Result<Option<T>, serde_json::Error> {
    match unwrap_envelope(value, keys) {
        Value::Null => Ok(None),
        inner => serde_json::from_value(inner).map(Some),
    }
}

/// Decode a collection; `null` after unwrapping is an empty list.
pub fn decode_list<T: DeserializeOwned>(
    value: Value,
    keys: &[&str],
) -> Result<Vec<T>, serde_json::Error> {
    match unwrap_envelope(value, keys) {
        Value::Null => Ok(Vec::new()),
        inner => serde_json::from_value(inner),
    }
}

/// The backend's `message` (or `error`) field, if any.
pub fn message_of(value: &Value) -> Option<String> {
    ["message", "error", "msg"]
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_nested_envelope() {
        let value = json!({ "success": true, "data": { "order": { "order_id": "ORD1" } } });
        assert_eq!(
            unwrap_envelope(value, &["order"]),
            json!({ "order_id": "ORD1" })
        );
    }

    #[test]
    fn test_bare_value_is_left_alone() {
        let value = json!([1, 2, 3]);
        assert_eq!(unwrap_envelope(value.clone(), &["products"]), value);
    }

    #[test]
    fn test_decode_list_shapes() {
        let wrapped: Vec<u32> = decode_list(json!({ "products": [1, 2] }), &["products"]).unwrap();
        let data: Vec<u32> = decode_list(json!({ "data": [3] }), &["products"]).unwrap();
        let bare: Vec<u32> = decode_list(json!([4, 5, 6]), &["products"]).unwrap();
        let null: Vec<u32> = decode_list(json!({ "data": null }), &["products"]).unwrap();
        assert_eq!(wrapped, vec![1, 2]);
        assert_eq!(data, vec![3]);
        assert_eq!(bare, vec![4, 5, 6]);
        assert!(null.is_empty());
    }

    #[test]
    fn test_message_of() {
        assert_eq!(
            message_of(&json!({ "success": false, "message": "Order not found" })).as_deref(),
            Some("Order not found")
        );
        assert_eq!(
            message_of(&json!({ "error": "Unauthorized" })).as_deref(),
            Some("Unauthorized")
        );
        assert!(message_of(&json!({ "ok": true })).is_none());
    }
}
