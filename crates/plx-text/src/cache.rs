use std::collections::VecDeque;

use plx_core::to_canonical_json_bytes;
use sha2::{Digest, Sha256};

/// Bounded FIFO memo store for extraction results.
///
/// The cache is an optimization only: clearing it at any point changes
/// latency, never outputs. Insertion past capacity drops the oldest entry.
#[derive(Debug, Clone)]
pub struct MemoCache {
    capacity: usize,
    entries: VecDeque<(String, String)>,
}

impl MemoCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Looks up a memoized result.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value.as_str())
    }

    /// Stores a result, evicting the oldest entry once capacity is exceeded.
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(slot) = self.entries.iter_mut().find(|(stored, _)| *stored == key) {
            slot.1 = value;
            return;
        }
        self.entries.push_back((key, value));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Drops every memoized entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of memoized entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes a stable hexadecimal key for a length-sorted input set.
///
/// The canonical JSON encoding keeps the digest unambiguous (`["ab","c"]`
/// and `["a","bc"]` hash differently); encoding a string slice cannot fail,
/// but the fallback keeps this path total regardless.
pub(crate) fn cache_key(sorted_texts: &[&str]) -> String {
    let bytes = to_canonical_json_bytes(&sorted_texts)
        .unwrap_or_else(|_| sorted_texts.join("\u{1f}").into_bytes());
    format!("{:x}", Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eviction_drops_oldest_first() {
        let mut cache = MemoCache::new(2);
        cache.insert("a".into(), "1".into());
        cache.insert("b".into(), "2".into());
        cache.insert("c".into(), "3".into());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some("2"));
        assert_eq!(cache.get("c"), Some("3"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinsert_updates_in_place() {
        let mut cache = MemoCache::new(2);
        cache.insert("a".into(), "1".into());
        cache.insert("a".into(), "2".into());
        assert_eq!(cache.get("a"), Some("2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_never_collide_across_split_points() {
        // ["ab", "c"] and ["a", "bc"] must not collide.
        assert_ne!(cache_key(&["ab", "c"]), cache_key(&["a", "bc"]));
    }
}
