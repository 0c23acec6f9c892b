//! Version commonality analysis.
//!
//! Given a set of version records (open field bags holding model parameters,
//! prompt messages, and an output schema), this crate classifies fields into
//! matching and differing, extracts the prompt content shared across
//! versions, and decides which version originates a shared prompt/schema
//! badge. All comparison is routed through the structural normalizer, so the
//! classification never depends on field or array order.

mod analyzer;
mod defaults;
mod keys;
mod record;

pub use analyzer::{
    first_version_index_sharing, shared_schema_key_paths, CommonalityAnalyzer, ShareMode,
};
pub use defaults::fill_defaults;
pub use keys::{differing_keys, matching_keys, matching_keys_excluding, DEFAULT_BLACKLIST};
pub use record::{VersionRecord, MODEL_FIELD, OUTPUT_SCHEMA_FIELD, PROMPT_FIELD};
