use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{EngineError, ErrorInfo};

/// Author role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// End-user turn.
    User,
    /// Model turn.
    Assistant,
    /// Developer instructions.
    Developer,
    /// Tool result turn.
    Tool,
}

/// One prompt message of a version configuration.
///
/// `content` is kept as a raw JSON value because the producing layer emits
/// heterogeneous shapes: a plain string, an array of content parts, or a
/// single part object. Only the text-resolvable portion participates in
/// commonality extraction; non-text parts (tool calls, files) are ignored
/// there but survive serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Author role.
    pub role: Role,
    /// Raw message content.
    pub content: Value,
}

impl Message {
    /// Returns the plain-text portion of the message content.
    ///
    /// String content is returned verbatim; array content contributes the
    /// `text` field of each part (or bare string parts) joined with single
    /// spaces; a single object part contributes its `text` field. Anything
    /// else resolves to the empty string.
    pub fn plain_text(&self) -> String {
        match &self.content {
            Value::String(text) => text.clone(),
            Value::Array(parts) => {
                let texts: Vec<&str> = parts.iter().filter_map(part_text).collect();
                texts.join(" ")
            }
            Value::Object(part) => part
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        }
    }
}

fn part_text(part: &Value) -> Option<&str> {
    match part {
        Value::String(text) => Some(text),
        Value::Object(fields) => fields.get("text").and_then(Value::as_str),
        _ => None,
    }
}

/// Strictly parses a prompt value into messages.
///
/// Every entry must carry a known role; the first malformed entry aborts the
/// parse with a structured error naming its position.
pub fn messages_from_value(prompt: &Value) -> Result<Vec<Message>, EngineError> {
    let entries = prompt.as_array().ok_or_else(|| {
        EngineError::Prompt(ErrorInfo::new(
            "prompt-not-array",
            "prompt value is not an array of messages",
        ))
    })?;
    let mut messages = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let message = serde_json::from_value(entry.clone()).map_err(|err| {
            EngineError::Prompt(
                ErrorInfo::new("prompt-bad-message", "failed to parse prompt message")
                    .with_context("position", position.to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        messages.push(message);
    }
    Ok(messages)
}

/// Leniently parses a prompt value, dropping malformed entries.
///
/// Absent, null, or non-array prompts yield an empty list; comparison paths
/// treat malformed optional fields as missing rather than as errors.
pub fn parse_messages(prompt: Option<&Value>) -> Vec<Message> {
    prompt
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
