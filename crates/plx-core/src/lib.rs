#![deny(missing_docs)]
#![doc = "Core types and normalization primitives shared across the Parallax comparison engine."]

pub mod errors;
mod message;
pub mod normalize;

pub use errors::{EngineError, ErrorInfo};
pub use message::{messages_from_value, parse_messages, Message, Role};
pub use normalize::{normalize, normalize_opt, to_canonical_json_bytes};
