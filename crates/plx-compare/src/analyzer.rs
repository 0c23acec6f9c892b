use plx_core::{normalize, Message};
use plx_text::{CommonalityOpts, TextCommonality};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::VersionRecord;

/// Which surfaces a shared-badge lookup compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareMode {
    /// Compare prompts only.
    PromptOnly,
    /// Compare output schemas only.
    SchemaOnly,
    /// Compare both surfaces at once.
    PromptAndSchema,
}

/// Computes the prompt content shared across a set of versions.
///
/// Owns the text extractor (and therefore its memo cache); one analyzer per
/// review surface is the intended embedding.
#[derive(Debug, Clone, Default)]
pub struct CommonalityAnalyzer {
    text: TextCommonality,
}

impl CommonalityAnalyzer {
    /// Creates an analyzer with explicit extraction options.
    pub fn new(opts: CommonalityOpts) -> Self {
        Self {
            text: TextCommonality::new(opts),
        }
    }

    /// The prompt messages shared by every version that has a prompt.
    ///
    /// Prompts are aligned positionally, not by role: position `i` only
    /// contributes when every qualifying version has a message there, all
    /// with the same role and non-empty extractable text. Each contributing
    /// position synthesizes one message whose content is the shared text of
    /// the per-version texts at that position; output order follows message
    /// position. Two prompts holding the same messages in a different order
    /// therefore share nothing — versions of one experiment are expected to
    /// be structurally parallel, and the UI depends on that reading.
    pub fn shared_prompt_content(&mut self, versions: &[VersionRecord]) -> Vec<Message> {
        let prompts: Vec<Vec<Message>> = versions
            .iter()
            .map(VersionRecord::prompt)
            .filter(|prompt| !prompt.is_empty())
            .collect();
        if prompts.is_empty() {
            return Vec::new();
        }
        if prompts.len() == 1 {
            return prompts.into_iter().next().unwrap_or_default();
        }

        let longest = prompts.iter().map(Vec::len).max().unwrap_or(0);
        let mut shared = Vec::new();
        for position in 0..longest {
            let slot: Vec<&Message> = prompts
                .iter()
                .filter_map(|prompt| prompt.get(position))
                .collect();
            if slot.len() != prompts.len() {
                continue;
            }
            let role = slot[0].role;
            if slot.iter().any(|message| message.role != role) {
                continue;
            }
            let texts: Vec<String> = slot.iter().map(|message| message.plain_text()).collect();
            if texts.iter().any(|text| text.trim().is_empty()) {
                continue;
            }
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let common = self.text.common_text(&refs);
            if !common.is_empty() {
                shared.push(Message {
                    role,
                    content: Value::String(common),
                });
            }
        }
        shared
    }

    /// Read access to the underlying extractor, mainly for tests.
    pub fn text(&self) -> &TextCommonality {
        &self.text
    }
}

/// Key paths declared by every version's output schema.
pub fn shared_schema_key_paths(versions: &[VersionRecord]) -> Vec<String> {
    let schemas: Vec<Value> = versions
        .iter()
        .filter_map(|version| version.output_schema().cloned())
        .collect();
    plx_schema::shared_key_paths(&schemas)
}

/// The lowest version index whose prompt and/or schema (per `mode`)
/// normalizes identically to the target's.
///
/// A target with nothing to share on the compared surfaces never qualifies:
/// the lookup decides whether a "same prompt as version K" badge is shown,
/// and an empty surface cannot originate one. Reflexivity holds otherwise —
/// a version that shares with no earlier version reports its own index.
pub fn first_version_index_sharing(
    versions: &[VersionRecord],
    target: usize,
    mode: ShareMode,
) -> Option<usize> {
    let record = versions.get(target)?;
    let target_prompt = prompt_key(record);
    let target_schema = schema_key(record);
    match mode {
        ShareMode::PromptOnly => {
            let want = target_prompt?;
            versions
                .iter()
                .position(|candidate| prompt_key(candidate).as_deref() == Some(want.as_str()))
        }
        ShareMode::SchemaOnly => {
            let want = target_schema?;
            versions
                .iter()
                .position(|candidate| schema_key(candidate).as_deref() == Some(want.as_str()))
        }
        ShareMode::PromptAndSchema => {
            if target_prompt.is_none() && target_schema.is_none() {
                return None;
            }
            versions.iter().position(|candidate| {
                prompt_key(candidate) == target_prompt && schema_key(candidate) == target_schema
            })
        }
    }
}

fn prompt_key(version: &VersionRecord) -> Option<String> {
    if !version.has_prompt() {
        return None;
    }
    version.get(crate::record::PROMPT_FIELD).map(normalize)
}

fn schema_key(version: &VersionRecord) -> Option<String> {
    version.output_schema().map(normalize)
}
