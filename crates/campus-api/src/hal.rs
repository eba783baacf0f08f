//! Collection normalization for HAL-or-array responses.
//!
//! Different backend builds return collections either as a bare JSON
//! array or wrapped in a HAL object (`{"_embedded": {"students": [...]}}`),
//! and some embed `_links`/`_embedded` metadata on each element. These
//! helpers flatten any of those shapes into a plain entity list.
//!
//! Every function here is pure and total: same input, same output, no
//! I/O, and no failure path. "No data yet" and "malformed response" both
//! normalize to an empty list; error surfacing belongs to the transport
//! layer alone.

use serde_json::{Map, Value};

/// Extract the flat list of entities from a collection payload.
///
/// - Array payload: returned as-is (order and count preserved), each
///   element stripped of HAL metadata.
/// - Object with `_embedded`: the `key_hint` member if present and
///   array-valued, otherwise the first array-valued member.
/// - Anything else: empty.
#[must_use]
pub fn unwrap_collection(payload: &Value, key_hint: Option<&str>) -> Vec<Value> {
    match payload {
        Value::Array(items) => items.iter().map(strip_meta).collect(),
        Value::Object(map) => {
            let Some(Value::Object(embedded)) = map.get("_embedded") else {
                return Vec::new();
            };
            let hinted = key_hint
                .and_then(|key| embedded.get(key))
                .and_then(Value::as_array);
            hinted
                .or_else(|| embedded.values().find_map(Value::as_array))
                .map(|items| items.iter().map(strip_meta).collect())
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Remove `_links`/`_embedded` keys from an object, recursively.
///
/// Scalars and arrays pass through with their contents stripped in turn.
#[must_use]
pub fn strip_meta(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let stripped: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| key.as_str() != "_links" && key.as_str() != "_embedded")
                .map(|(key, val)| (key.clone(), strip_meta(val)))
                .collect();
            Value::Object(stripped)
        }
        Value::Array(items) => Value::Array(items.iter().map(strip_meta).collect()),
        other => other.clone(),
    }
}

/// Normalize a collection payload and deserialize each element into `T`.
///
/// Elements that do not fit `T` are skipped (logged at debug), so one
/// malformed row cannot take down a whole listing.
#[must_use]
pub fn unwrap_typed<T: serde::de::DeserializeOwned>(
    payload: &Value,
    key_hint: Option<&str>,
) -> Vec<T> {
    unwrap_collection(payload, key_hint)
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(entity) => Some(entity),
            Err(error) => {
                tracing::debug!(%error, "skipping element that failed to deserialize");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn array_payload_is_returned_unchanged() {
        let payload = json!([{"id": 1, "code": "A"}, {"id": 2, "code": "B"}]);
        let items = unwrap_collection(&payload, None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({"id": 1, "code": "A"}));
        assert_eq!(items[1], json!({"id": 2, "code": "B"}));
    }

    #[test]
    fn embedded_key_hint_is_preferred() {
        let payload = json!({
            "_embedded": {
                "other": [{"id": 99}],
                "students": [{"id": 1}, {"id": 2}]
            }
        });
        let items = unwrap_collection(&payload, Some("students"));
        assert_eq!(items, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn wrong_hint_falls_back_to_first_array_member() {
        let payload = json!({
            "_embedded": {
                "page": 1,
                "moduleList": [{"id": 3, "code": "M1"}]
            }
        });
        let items = unwrap_collection(&payload, Some("modules"));
        assert_eq!(items, vec![json!({"id": 3, "code": "M1"})]);
    }

    #[test]
    fn missing_hint_falls_back_to_first_array_member() {
        let payload = json!({"_embedded": {"grades": [{"id": 7}]}});
        let items = unwrap_collection(&payload, None);
        assert_eq!(items, vec![json!({"id": 7})]);
    }

    #[test]
    fn degenerate_payloads_normalize_to_empty() {
        assert!(unwrap_collection(&Value::Null, None).is_empty());
        assert!(unwrap_collection(&json!({}), None).is_empty());
        assert!(unwrap_collection(&json!({"_embedded": {}}), Some("students")).is_empty());
        assert!(unwrap_collection(&json!({"_embedded": {"page": 3}}), None).is_empty());
        assert!(unwrap_collection(&json!("not a collection"), None).is_empty());
        assert!(unwrap_collection(&json!(42), None).is_empty());
    }

    #[test]
    fn strip_meta_removes_hal_keys_recursively() {
        let payload = json!([{
            "id": 1,
            "_links": {"self": {"href": "/students/1"}},
            "module": {
                "id": 2,
                "_links": {"self": {"href": "/modules/2"}},
                "_embedded": {"x": []}
            }
        }]);
        let items = unwrap_collection(&payload, None);
        assert_eq!(
            items,
            vec![json!({"id": 1, "module": {"id": 2}})]
        );
    }

    #[test]
    fn strip_meta_passes_scalars_through() {
        assert_eq!(strip_meta(&json!(5)), json!(5));
        assert_eq!(strip_meta(&json!("x")), json!("x"));
        assert_eq!(strip_meta(&Value::Null), Value::Null);
    }

    #[test]
    fn unwrap_typed_skips_malformed_elements() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: i64,
        }
        let payload = json!([{"id": 1}, {"id": "not-a-number"}, {"id": 3}]);
        let rows: Vec<Row> = unwrap_typed(&payload, None);
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 3 }]);
    }

    #[test]
    fn unwrap_is_deterministic() {
        let payload = json!({"_embedded": {"students": [{"id": 1}]}});
        assert_eq!(
            unwrap_collection(&payload, Some("students")),
            unwrap_collection(&payload, Some("students"))
        );
    }
}
