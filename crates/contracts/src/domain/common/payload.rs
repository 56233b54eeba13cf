//! Mutation payload helpers
//!
//! The single stripping rule for create/update bodies: `id`, `createdAt`,
//! `updatedAt` and the resource's declared `server_fields()` never travel in
//! a mutation.

use serde_json::{Map, Value};

use super::Resource;

pub const SERVER_MANAGED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Remove server-managed keys from a JSON object in place.
/// Non-object values are left untouched.
pub fn strip_server_fields(value: &mut Value, extra: &[&str]) {
    if let Value::Object(map) = value {
        for key in SERVER_MANAGED_FIELDS.iter().chain(extra.iter()) {
            map.remove(*key);
        }
    }
}

/// JSON body for POST/PATCH of a resource payload
pub fn mutation_body<R: Resource>(draft: &R) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(draft)?;
    strip_server_fields(&mut value, R::server_fields());
    Ok(value)
}

/// Parse an incoming mutation body into the typed payload, ignoring any
/// server-managed keys the caller sent.
pub fn payload_from_value<R: Resource>(mut value: Value) -> Result<R, serde_json::Error> {
    strip_server_fields(&mut value, R::server_fields());
    serde_json::from_value(value)
}

/// Shallow merge: every top-level key of `patch` replaces the one in
/// `target`. Both must be objects, otherwise `target` is left as is.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    if let (Value::Object(target), Value::Object(patch)) = (target, patch) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Copy selected keys from one JSON object into another (`source -> target`).
/// Missing and `null` source values are skipped.
pub fn copy_fields(source: &Value, target: &mut Map<String, Value>, copies: &[(&str, &str)]) {
    for (from, to) in copies {
        match source.get(from) {
            None | Some(Value::Null) => {}
            Some(value) => {
                target.insert((*to).to_string(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_server_fields() {
        let mut value = json!({
            "id": 4,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "totalAmount": 100.0,
            "customerName": "A Corp"
        });
        strip_server_fields(&mut value, &["totalAmount"]);
        assert_eq!(value, json!({"customerName": "A Corp"}));
    }

    #[test]
    fn test_merge_patch_is_shallow() {
        let mut target = json!({"status": "pending", "quantity": 3});
        merge_patch(&mut target, &json!({"status": "resolved"}));
        assert_eq!(target, json!({"status": "resolved", "quantity": 3}));

        let mut scalar = json!(1);
        merge_patch(&mut scalar, &json!({"a": 1}));
        assert_eq!(scalar, json!(1));
    }

    #[test]
    fn test_copy_fields_skips_null() {
        let source = json!({"orderNumber": "PO-1", "customerName": null, "quantity": 5});
        let mut target = Map::new();
        target.insert("customerName".into(), json!("kept"));
        copy_fields(
            &source,
            &mut target,
            &[("orderNumber", "orderNumber"), ("customerName", "customerName"), ("quantity", "plannedQuantity")],
        );
        assert_eq!(target["orderNumber"], "PO-1");
        assert_eq!(target["customerName"], "kept");
        assert_eq!(target["plannedQuantity"], 5);
    }
}
