use crate::cache::{cache_key, MemoCache};
use crate::pairwise::pairwise_common;
use crate::params::{select_strategy, CommonalityOpts, Strategy, MIN_FRAGMENT_CHARS};
use crate::words::word_intersection_common;

/// Extracts the text shared by every member of a corpus.
///
/// The extractor owns its memo cache, so embedding it behind a lock (or one
/// instance per thread) is the caller's choice. Results are deterministic
/// for a given input multiset: inputs are length-sorted before strategy
/// dispatch, which also pins the anchor text of the large-corpus scan.
#[derive(Debug, Clone)]
pub struct TextCommonality {
    opts: CommonalityOpts,
    cache: MemoCache,
}

impl Default for TextCommonality {
    fn default() -> Self {
        Self::new(CommonalityOpts::default())
    }
}

impl TextCommonality {
    /// Creates an extractor with the provided options.
    pub fn new(opts: CommonalityOpts) -> Self {
        let opts = opts.sanitised();
        let cache = MemoCache::new(opts.cache_capacity);
        Self { opts, cache }
    }

    /// Returns the substrings and phrases shared by all input texts, joined
    /// with single spaces and sorted longest-first.
    ///
    /// Inputs that trim below three characters are discarded up front; an
    /// empty corpus yields `""` and a single survivor is returned verbatim.
    /// Completely disjoint corpora also yield `""`.
    pub fn common_text(&mut self, texts: &[&str]) -> String {
        let mut valid: Vec<&str> = texts
            .iter()
            .copied()
            .filter(|text| text.trim().len() >= MIN_FRAGMENT_CHARS)
            .collect();
        match valid.len() {
            0 => return String::new(),
            1 => return valid[0].to_string(),
            _ => {}
        }
        valid.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let key = cache_key(&valid);
        if let Some(hit) = self.cache.get(&key) {
            return hit.to_string();
        }

        let total_chars: usize = valid.iter().map(|text| text.len()).sum();
        let result = match select_strategy(valid.len(), total_chars, &self.opts) {
            Strategy::Pairwise => pairwise_common(&valid),
            Strategy::WordIntersection => word_intersection_common(&valid)
                .unwrap_or_else(|| pairwise_common(&valid)),
        };
        self.cache.insert(key, result.clone());
        result
    }

    /// Drops every memoized result; subsequent calls recompute from scratch.
    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    /// Read access to the memo cache, mainly for tests.
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// The options the extractor was built with.
    pub fn opts(&self) -> &CommonalityOpts {
        &self.opts
    }
}
