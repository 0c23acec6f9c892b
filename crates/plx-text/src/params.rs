use serde::{Deserialize, Serialize};

/// Minimum trimmed length for an input text or extracted fragment to count.
pub(crate) const MIN_FRAGMENT_CHARS: usize = 3;

/// Options controlling strategy selection and caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonalityOpts {
    /// Largest corpus (text count) still handled by the pairwise strategy.
    pub max_pairwise_texts: usize,
    /// Largest corpus (total characters) still handled by the pairwise strategy.
    pub max_pairwise_chars: usize,
    /// Number of memoized results kept before the oldest entry is evicted.
    pub cache_capacity: usize,
}

impl Default for CommonalityOpts {
    fn default() -> Self {
        Self {
            max_pairwise_texts: 10,
            max_pairwise_chars: 10_000,
            cache_capacity: 50,
        }
    }
}

impl CommonalityOpts {
    /// Ensures the configuration is well-formed and returns a sanitised copy.
    pub fn sanitised(&self) -> Self {
        Self {
            max_pairwise_texts: self.max_pairwise_texts.max(1),
            max_pairwise_chars: self.max_pairwise_chars.max(1),
            cache_capacity: self.cache_capacity.max(1),
        }
    }
}

/// Extraction strategy selected for a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Myers-diff alignment folded across the corpus; exact, small inputs.
    Pairwise,
    /// Word and phrase set intersection; approximate, large inputs.
    WordIntersection,
}

/// Pure selector mapping corpus shape to a strategy.
pub fn select_strategy(text_count: usize, total_chars: usize, opts: &CommonalityOpts) -> Strategy {
    if text_count > opts.max_pairwise_texts || total_chars > opts.max_pairwise_chars {
        Strategy::WordIntersection
    } else {
        Strategy::Pairwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_switches_on_either_threshold() {
        let opts = CommonalityOpts::default();
        assert_eq!(select_strategy(2, 100, &opts), Strategy::Pairwise);
        assert_eq!(select_strategy(11, 100, &opts), Strategy::WordIntersection);
        assert_eq!(select_strategy(2, 10_001, &opts), Strategy::WordIntersection);
        assert_eq!(select_strategy(10, 10_000, &opts), Strategy::Pairwise);
    }
}
