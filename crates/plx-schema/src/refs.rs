use serde_json::Value;

/// Resolves an internal `$ref` pointer against the root schema.
///
/// Only `"#/..."`-style pointers are supported; any other form, a dangling
/// pointer, or a node without `$ref` returns the node unchanged. Resolution
/// failures never raise: the caller proceeds with degraded (possibly
/// duplicated) extraction, matching the best-effort comparison policy.
pub fn resolve_ref<'a>(node: &'a Value, root: &'a Value) -> &'a Value {
    let Some(reference) = node.get("$ref").and_then(Value::as_str) else {
        return node;
    };
    let Some(pointer) = reference.strip_prefix("#") else {
        return node;
    };
    if !pointer.starts_with('/') {
        return node;
    }
    root.pointer(pointer).unwrap_or(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn internal_pointer_resolves_against_root() {
        let root = json!({
            "$defs": {"address": {"properties": {"city": {"type": "string"}}}},
            "properties": {"home": {"$ref": "#/$defs/address"}},
        });
        let node = &root["properties"]["home"];
        let resolved = resolve_ref(node, &root);
        assert!(resolved.get("properties").is_some());
    }

    #[test]
    fn dangling_and_external_refs_return_the_node() {
        let root = json!({"properties": {}});
        let dangling = json!({"$ref": "#/$defs/missing"});
        let external = json!({"$ref": "https://example.com/schema.json"});
        assert_eq!(resolve_ref(&dangling, &root), &dangling);
        assert_eq!(resolve_ref(&external, &root), &external);
    }
}
