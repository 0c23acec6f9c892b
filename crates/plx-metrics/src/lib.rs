//! Metric ranking and percentile statistics for the review surface.
//!
//! Ranking classifies one value against the population of comparable values
//! (best/worst plus a quantified relative difference); percentiles summarize
//! a population for the latency/cost tables. The semantic tag of a metric
//! changes only wording and polarity, never the ranking math.

mod badge;
mod percentile;

pub use badge::{rank_and_badge, MetricBadge, MetricKind, Tone};
pub use percentile::{percentiles, PercentileSummary};
