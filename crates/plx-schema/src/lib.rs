//! Key-path extraction over JSON-Schema-like trees.
//!
//! The review surface compares output schemas across versions by their
//! flattened property paths; this crate walks `properties`/`items` trees,
//! resolves internal `$ref` pointers against the root document, and
//! intersects path sets across schemas.

mod keypaths;
mod refs;

pub use keypaths::{extract_key_paths, shared_key_paths};
pub use refs::resolve_ref;
