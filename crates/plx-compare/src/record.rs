use plx_core::{parse_messages, Message};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the ordered prompt messages.
pub const PROMPT_FIELD: &str = "prompt";
/// Field holding the structured output schema.
pub const OUTPUT_SCHEMA_FIELD: &str = "output_schema";
/// Field holding the model identifier; displayed separately by callers.
pub const MODEL_FIELD: &str = "model";

/// One configuration variant under comparison.
///
/// A record is an open bag of fields: distinguished entries (`prompt`,
/// `output_schema`, `model`) next to arbitrary tunables. Fields with
/// defaults may be absent; the default-filling step makes absence and
/// explicit defaults compare equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionRecord {
    fields: Map<String, Value>,
}

impl VersionRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builds a record from an arbitrary JSON value; anything but an object
    /// yields an empty record (malformed input degrades, it never fails).
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(fields) => Self {
                fields: fields.clone(),
            },
            None => Self::default(),
        }
    }

    /// Looks up a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Whether the field is present (even as an explicit null).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates over the field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The prompt messages, leniently parsed; malformed entries are dropped.
    pub fn prompt(&self) -> Vec<Message> {
        parse_messages(self.get(PROMPT_FIELD))
    }

    /// Whether the record carries at least one parseable prompt message.
    pub fn has_prompt(&self) -> bool {
        !self.prompt().is_empty()
    }

    /// The output schema, or `None` when absent or null.
    pub fn output_schema(&self) -> Option<&Value> {
        self.get(OUTPUT_SCHEMA_FIELD).filter(|value| !value.is_null())
    }
}
