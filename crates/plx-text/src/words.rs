use std::collections::BTreeSet;

/// Minimum length for a token to participate in the word intersection.
const MIN_WORD_CHARS: usize = 3;
/// Sentences shorter than this (in characters) are skipped by the phrase scan.
const MIN_SENTENCE_CHARS: usize = 15;
/// Number of anchor sentences examined by the phrase scan.
const MAX_SENTENCES: usize = 15;
/// Sliding window bounds, in words.
const PHRASE_MIN_WORDS: usize = 3;
const PHRASE_MAX_WORDS: usize = 6;
/// Phrase length bounds, in characters.
const PHRASE_MIN_CHARS: usize = 12;
const PHRASE_MAX_CHARS: usize = 120;
/// Number of probe texts a candidate phrase is checked against.
const MAX_PROBE_TEXTS: usize = 5;
/// Result caps: at most `MAX_RESULTS` fragments, backfilled up to `MIN_RESULTS`.
const MAX_RESULTS: usize = 8;
const MIN_RESULTS: usize = 3;

/// Computes shared content for a large corpus via word and phrase
/// intersection.
///
/// Returns `None` when the corpus shares no words at all, signalling the
/// caller to fall back to the pairwise strategy. The phrase scan anchors on
/// the first (shortest) text only and probes at most `MAX_PROBE_TEXTS`
/// other texts; the asymmetry keeps large corpora cheap.
pub(crate) fn word_intersection_common(sorted_texts: &[&str]) -> Option<String> {
    let mut common_words = tokenize(sorted_texts[0]);
    for text in &sorted_texts[1..] {
        let tokens = tokenize(text);
        common_words = common_words.intersection(&tokens).cloned().collect();
        if common_words.is_empty() {
            return None;
        }
    }

    let probes: Vec<String> = sorted_texts[1..]
        .iter()
        .take(MAX_PROBE_TEXTS)
        .map(|text| text.to_lowercase())
        .collect();
    let mut candidates = shared_phrases(sorted_texts[0], &probes);
    for word in &common_words {
        candidates.push(original_spelling(word, sorted_texts));
    }
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut kept: Vec<String> = Vec::new();
    for candidate in candidates {
        if kept.len() >= MAX_RESULTS {
            break;
        }
        if covered(&kept, &candidate) {
            continue;
        }
        kept.push(candidate);
    }
    if kept.len() < MIN_RESULTS {
        for word in &common_words {
            if kept.len() >= MIN_RESULTS {
                break;
            }
            let spelled = original_spelling(word, sorted_texts);
            if covered(&kept, &spelled) {
                continue;
            }
            kept.push(spelled);
        }
    }
    Some(kept.join(" "))
}

fn covered(kept: &[String], candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    kept.iter().any(|entry| entry.to_lowercase().contains(&lower))
}

/// Lowercase token set of a text.
///
/// Tokens are whitespace-delimited words stripped of surrounding
/// punctuation; a token must start with an alphanumeric, `@`, `.`, or `-`
/// character so emails and URLs survive, and must be at least three
/// characters long.
fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(|raw| {
            let token = raw.trim_matches(|c: char| !is_token_char(c));
            let starts_ok = token.chars().next().map_or(false, is_token_char);
            if starts_ok && token.len() >= MIN_WORD_CHARS {
                Some(token.to_string())
            } else {
                None
            }
        })
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '-')
}

/// Scans the anchor text's sentences for word windows that appear verbatim
/// (case-insensitively) in every probe text.
fn shared_phrases(anchor: &str, probes: &[String]) -> Vec<String> {
    let mut phrases = Vec::new();
    for sentence in sentences(anchor).into_iter().take(MAX_SENTENCES) {
        let spans = word_spans(sentence);
        for width in PHRASE_MIN_WORDS..=PHRASE_MAX_WORDS {
            if spans.len() < width {
                break;
            }
            for start in 0..=(spans.len() - width) {
                let begin = spans[start].0;
                let end = spans[start + width - 1].1;
                let phrase = &sentence[begin..end];
                if phrase.len() < PHRASE_MIN_CHARS || phrase.len() > PHRASE_MAX_CHARS {
                    continue;
                }
                // Windows spanning long whitespace runs are mostly padding.
                if phrase.trim().len() * 2 < phrase.len() {
                    continue;
                }
                let lowered = phrase.to_lowercase();
                if probes.iter().all(|probe| probe.contains(&lowered)) {
                    phrases.push(phrase.to_string());
                }
            }
        }
    }
    phrases
}

/// Splits a text into trimmed sentences longer than the minimum length.
fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|sentence| sentence.len() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Byte spans of the whitespace-delimited words of a sentence.
fn word_spans(sentence: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (idx, ch) in sentence.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                spans.push((begin, idx));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(begin) = start {
        spans.push((begin, sentence.len()));
    }
    spans
}

/// Recovers the original casing of a lowercase token from the first input
/// text containing it. Falls back to the lowercase form when byte offsets
/// shift under case folding.
fn original_spelling(word: &str, texts: &[&str]) -> String {
    for text in texts {
        let lowered = text.to_lowercase();
        if let Some(position) = lowered.find(word) {
            if let Some(slice) = text.get(position..position + word.len()) {
                return slice.to_string();
            }
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_tolerate_emails_and_urls() {
        let tokens = tokenize("Contact us at help@example.com or visit docs.example.com!");
        assert!(tokens.contains("help@example.com"));
        assert!(tokens.contains("docs.example.com"));
        assert!(!tokens.contains("at"));
        assert!(!tokens.contains("or"));
    }

    #[test]
    fn disjoint_corpora_yield_none() {
        assert_eq!(
            word_intersection_common(&["alpha beta gamma", "delta epsilon zeta"]),
            None
        );
    }

    #[test]
    fn shared_phrase_beats_bare_words() {
        let texts = [
            "Summarize the following document for the reader. Keep it short",
            "Summarize the following document for the boss. Keep it punchy",
            "Summarize the following document for the team. Keep it fresh",
        ];
        let result = word_intersection_common(&texts).unwrap();
        assert!(
            result.to_lowercase().contains("summarize the following document"),
            "got: {result}"
        );
    }

    #[test]
    fn common_words_keep_original_casing() {
        let texts = [
            "Tokyo weather report for today with details",
            "the weather in Tokyo looks fine with details",
        ];
        let result = word_intersection_common(&texts).unwrap();
        assert!(result.contains("Tokyo"), "got: {result}");
    }
}
