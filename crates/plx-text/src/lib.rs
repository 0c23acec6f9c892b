//! Shared-text extraction for the Parallax comparison engine.
//!
//! Given N texts, [`TextCommonality`] returns the substrings and phrases
//! common to all of them. Two interchangeable strategies cover the small and
//! large corpus regimes; a bounded FIFO memo cache makes repeated render
//! passes cheap without affecting outputs.

mod cache;
mod extract;
mod pairwise;
mod params;
mod words;

pub use cache::MemoCache;
pub use extract::TextCommonality;
pub use params::{select_strategy, CommonalityOpts, Strategy};
