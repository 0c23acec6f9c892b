use similar::{ChangeTag, TextDiff};

use crate::params::MIN_FRAGMENT_CHARS;

/// Largest number of fragments surfaced from a pairwise fold.
const MAX_FRAGMENTS: usize = 10;

/// Computes the common remainder of a length-sorted corpus by folding a
/// Myers word diff across it.
///
/// The two shortest texts seed the fold; only `Equal` runs survive each
/// alignment, so the running remainder always reflects content present in
/// every text seen so far. An empty remainder short-circuits the fold.
pub(crate) fn pairwise_common(sorted_texts: &[&str]) -> String {
    let mut fragments = vec![sorted_texts[0].to_string()];
    for text in &sorted_texts[1..] {
        let remainder = fragments.join(" ");
        fragments = equal_runs(&remainder, text);
        if fragments.is_empty() {
            return String::new();
        }
    }
    fragments.truncate(MAX_FRAGMENTS);
    fragments.join(" ").trim().to_string()
}

/// Extracts the aligned `Equal` runs between two texts, dropping runs that
/// trim below the minimum fragment length.
fn equal_runs(a: &str, b: &str) -> Vec<String> {
    let diff = TextDiff::from_words(a, b);
    let mut runs = Vec::new();
    let mut current = String::new();
    for change in diff.iter_all_changes() {
        if change.tag() == ChangeTag::Equal {
            current.push_str(change.value());
        } else if !current.is_empty() {
            push_run(&mut runs, &current);
            current.clear();
        }
    }
    if !current.is_empty() {
        push_run(&mut runs, &current);
    }
    runs
}

fn push_run(runs: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.len() >= MIN_FRAGMENT_CHARS {
        runs.push(trimmed.to_string());
    }
}
