use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::refs::resolve_ref;

/// Flattens a `properties` map into dotted key paths.
///
/// Every property emits its own path before its children; children are
/// visited in the map's natural key order. Array element properties are
/// addressed directly under the array's path (no `items` segment). `$ref`
/// nodes are resolved against `root` before classification, and a nested
/// object carrying no schema keyword at all is walked as a generic record.
pub fn extract_key_paths(
    properties: &Map<String, Value>,
    prefix: Option<&str>,
    root: &Value,
) -> Vec<String> {
    let mut paths = Vec::new();
    for (name, node) in properties {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        paths.push(path.clone());
        let resolved = resolve_ref(node, root);
        if let Some(children) = resolved.get("properties").and_then(Value::as_object) {
            paths.extend(extract_key_paths(children, Some(&path), root));
        } else if let Some(element_children) = item_properties(resolved, root) {
            paths.extend(extract_key_paths(element_children, Some(&path), root));
        } else if let Some(plain_children) = generic_children(resolved) {
            paths.extend(extract_key_paths(plain_children, Some(&path), root));
        }
    }
    paths
}

/// Key paths present in every schema of the set, sorted ascending.
///
/// A single schema returns its own paths; an empty set returns nothing. The
/// intersection short-circuits as soon as it empties.
pub fn shared_key_paths(schemas: &[Value]) -> Vec<String> {
    let mut sets = schemas.iter().map(|schema| {
        schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| extract_key_paths(properties, None, schema))
            .unwrap_or_default()
            .into_iter()
            .collect::<BTreeSet<String>>()
    });
    let Some(mut shared) = sets.next() else {
        return Vec::new();
    };
    for set in sets {
        shared = shared.intersection(&set).cloned().collect();
        if shared.is_empty() {
            break;
        }
    }
    shared.into_iter().collect()
}

fn item_properties<'a>(node: &'a Value, root: &'a Value) -> Option<&'a Map<String, Value>> {
    let items = resolve_ref(node.get("items")?, root);
    items.get("properties").and_then(Value::as_object)
}

/// A plain nested object: no schema keyword, so its entries are treated as
/// properties directly.
fn generic_children(node: &Value) -> Option<&Map<String, Value>> {
    let map = node.as_object()?;
    let schema_like = ["properties", "items", "type", "$ref", "enum"]
        .iter()
        .any(|keyword| map.contains_key(*keyword));
    if schema_like {
        None
    } else {
        Some(map)
    }
}
