//! Fallback keyword search over every stored entry.
//!
//! Used when classification gives nothing usable. Each entry is scored by its
//! own keyword list:
//! - +3 when a keyword occurs inside the input
//! - otherwise +1 when any input word occurs inside the keyword
//!
//! The second rule also fires for very short words (two-letter particles
//! match inside many keywords). That is a known source of false positives
//! and is kept as is.

use super::store::KnowledgeStore;
use crate::normalizer::Normalizer;
use crate::types::{Intent, Topic};

/// Points for a keyword contained in the input.
pub const KEYWORD_IN_INPUT_POINTS: u32 = 3;

/// Points for an input word contained in a keyword.
pub const PARTIAL_WORD_POINTS: u32 = 1;

/// Score one entry's normalized keywords against a normalized input.
pub fn score_entry(normalized_input: &str, keywords: &[String]) -> u32 {
    let input_words: Vec<&str> = normalized_input.split_whitespace().collect();

    keywords
        .iter()
        .map(|keyword| {
            if normalized_input.contains(keyword.as_str()) {
                KEYWORD_IN_INPUT_POINTS
            } else if input_words.iter().any(|w| keyword.contains(w)) {
                PARTIAL_WORD_POINTS
            } else {
                0
            }
        })
        .sum()
}

/// A fallback search winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackHit {
    pub topic: Topic,
    pub intent: Intent,
    pub score: u32,
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    topic: Topic,
    intent: Intent,
    keywords: Vec<String>,
}

/// Store keywords normalized once, in store iteration order.
#[derive(Debug, Clone, Default)]
pub struct FallbackIndex {
    entries: Vec<IndexedEntry>,
}

impl FallbackIndex {
    pub fn build(store: &KnowledgeStore, normalizer: &Normalizer) -> Self {
        let entries = store
            .entries()
            .map(|e| IndexedEntry {
                topic: e.topic,
                intent: e.intent,
                keywords: normalizer
                    .normalize_batch(&e.keywords)
                    .into_iter()
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();

        Self { entries }
    }

    /// Best-scoring entry, if any scores above zero.
    ///
    /// Only a strictly greater score replaces the current best, so the entry
    /// met first wins ties.
    pub fn search(&self, normalized_input: &str) -> Option<FallbackHit> {
        let mut best: Option<FallbackHit> = None;

        for entry in &self.entries {
            let score = score_entry(normalized_input, &entry.keywords);
            if score > best.map(|b| b.score).unwrap_or(0) {
                best = Some(FallbackHit {
                    topic: entry.topic,
                    intent: entry.intent,
                    score,
                });
            }
        }

        best
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| normalize(s)).collect()
    }

    #[test]
    fn test_keyword_in_input_scores_three() {
        let keywords = strings(&["علاج الذاكرة"]);
        assert_eq!(score_entry(&normalize("ابحث عن علاج الذاكرة"), &keywords), 3);
    }

    #[test]
    fn test_partial_word_scores_one() {
        let keywords = strings(&["تقوية الذاكرة"]);
        assert_eq!(score_entry(&normalize("تقوية"), &keywords), 1);
    }

    #[test]
    fn test_full_match_does_not_also_add_partial() {
        let keywords = strings(&["تحسين"]);
        assert_eq!(score_entry("تحسين", &keywords), 3);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let keywords = strings(&["علاج الذاكرة", "تعريف"]);
        assert_eq!(score_entry("", &keywords), 0);
    }

    #[test]
    fn test_short_word_false_positive_is_kept() {
        // "ما" sits inside "ما هو الادراك"; one point, by the partial rule.
        let keywords = strings(&["ما هو الإدراك"]);
        assert_eq!(score_entry("ما", &keywords), 1);
        assert_eq!(score_entry("ما رايك", &keywords), 1);
        assert_eq!(score_entry("رايك", &keywords), 0);
    }

    #[test]
    fn test_search_first_entry_wins_ties() {
        let store = KnowledgeStore::from_toml_str(
            r#"
[[topic]]
key = "attention"
[[topic.entry]]
intent = "treatment"
keywords = ["مشاكل الانتباه"]
response = "a"

[[topic]]
key = "memory"
[[topic.entry]]
intent = "treatment"
keywords = ["مشاكل الذاكرة"]
response = "m"
"#,
        )
        .unwrap();
        let index = FallbackIndex::build(&store, &Normalizer::new());

        let hit = index.search("مشاكل").unwrap();
        assert_eq!((hit.topic, hit.intent, hit.score), (Topic::Attention, Intent::Treatment, 1));

        let hit = index.search("مشاكل الذاكره").unwrap();
        assert_eq!(hit.topic, Topic::Memory);
        assert_eq!(hit.score, 3);

        assert!(index.search("شيء اخر").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = FallbackIndex::build(&KnowledgeStore::empty(), &Normalizer::new());
        assert!(index.is_empty());
        assert!(index.search("علاج").is_none());
    }
}
