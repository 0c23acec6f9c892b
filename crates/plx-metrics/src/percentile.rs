use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Computes interpolated percentiles of a population.
///
/// The population is sorted ascending; a target percentile `p` addresses the
/// fractional index `(p/100)·(n-1)` and interpolates linearly between its
/// neighbours, clamping to the last element when the ceiling index runs out
/// of range. An empty population yields an empty result.
pub fn percentiles(values: &[f64], targets: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    targets
        .iter()
        .map(|target| interpolated(&sorted, *target))
        .collect()
}

fn interpolated(sorted: &[f64], target: f64) -> f64 {
    let index = ((target / 100.0) * (sorted.len() - 1) as f64).max(0.0);
    let floor = index.floor() as usize;
    let ceil = index.ceil() as usize;
    if ceil >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    let weight = index - floor as f64;
    sorted[floor] + (sorted[ceil] - sorted[floor]) * weight
}

/// The percentile triple tabulated by the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSummary {
    /// Median.
    pub p50: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 99th percentile.
    pub p99: f64,
}

impl PercentileSummary {
    /// Summarizes a population, or `None` when it is empty.
    pub fn from_population(values: &[f64]) -> Option<Self> {
        let triple = percentiles(values, &[50.0, 90.0, 99.0]);
        match triple.as_slice() {
            [p50, p90, p99] => Some(Self {
                p50: *p50,
                p90: *p90,
                p99: *p99,
            }),
            _ => None,
        }
    }
}
