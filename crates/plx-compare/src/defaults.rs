use serde_json::{json, Value};

use crate::record::VersionRecord;

/// Fixed defaults for the known optional tunables.
///
/// A version that omits one of these fields is compared as if it carried the
/// default explicitly, so "absent" and "explicit default" never register as
/// a difference.
fn default_entries() -> [(&'static str, Value); 7] {
    [
        ("temperature", json!(1.0)),
        ("top_p", json!(1.0)),
        ("frequency_penalty", json!(0.0)),
        ("presence_penalty", json!(0.0)),
        ("max_tokens", json!("unlimited")),
        ("tool_choice", json!("auto")),
        ("stream", json!(false)),
    ]
}

/// Returns a copy of the version with every absent tunable set to its
/// default. The input record is never mutated.
pub fn fill_defaults(version: &VersionRecord) -> VersionRecord {
    let mut filled = version.clone();
    for (field, value) in default_entries() {
        if !filled.contains(field) {
            filled.insert(field, value);
        }
    }
    filled
}
