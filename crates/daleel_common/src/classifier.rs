//! Intent/topic classifier.
//!
//! Rule-based and deterministic:
//! - Intent: +5 per trigger equal to the whole input, +2 per trigger found
//!   inside it. Highest total wins, ties go to the earlier intent, zero means
//!   `general`.
//! - Topic: each keyword found inside the input adds its word count, so
//!   multi-word keywords outweigh single words.
//! - Confidence: (intent trigger hits + topic keyword hits) / input words,
//!   capped at 1.0. A density heuristic, not a probability.
//!
//! Matching is plain substring containment on normalized text. It tolerates
//! dialect spellings and multi-word phrases at the cost of hits inside
//! unrelated words.

use crate::lexicon::Lexicon;
use crate::normalizer::{word_count, Normalizer};
use crate::types::{Intent, Topic};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Points for a trigger that is the entire input.
pub const EXACT_MATCH_POINTS: u32 = 5;

/// Points for a trigger contained in the input.
pub const CONTAINS_POINTS: u32 = 2;

/// Outcome of classifying one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub topic: Option<Topic>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Input after normalization
    pub normalized_input: String,
    /// Triggers and keywords that contributed to the confidence
    pub matched_keywords: Vec<String>,
}

/// Sum intent points for one trigger list against a normalized input.
pub fn score_intent_patterns(normalized_input: &str, patterns: &[String]) -> u32 {
    patterns
        .iter()
        .filter(|p| normalized_input.contains(p.as_str()))
        .map(|p| {
            if p.as_str() == normalized_input {
                EXACT_MATCH_POINTS
            } else {
                CONTAINS_POINTS
            }
        })
        .sum()
}

/// Sum topic points: word count of every keyword contained in the input.
pub fn score_topic_keywords(normalized_input: &str, keywords: &[String]) -> u32 {
    keywords
        .iter()
        .filter(|k| normalized_input.contains(k.as_str()))
        .map(|k| word_count(k) as u32)
        .sum()
}

/// Number of phrases contained in the input.
pub fn count_hits(normalized_input: &str, phrases: &[String]) -> usize {
    phrases
        .iter()
        .filter(|p| normalized_input.contains(p.as_str()))
        .count()
}

/// Highest strictly-positive score; the first candidate wins ties.
fn pick_best<K: Copy>(scores: impl Iterator<Item = (K, u32)>) -> Option<K> {
    let mut best: Option<(K, u32)> = None;
    for (key, score) in scores {
        if score > best.map(|(_, s)| s).unwrap_or(0) {
            best = Some((key, score));
        }
    }
    best.map(|(key, _)| key)
}

/// Classifier over a normalized lexicon.
#[derive(Debug, Clone)]
pub struct Classifier {
    normalizer: Normalizer,
    // Keyed by enum order, which is the tie-break order.
    intent_patterns: BTreeMap<Intent, Vec<String>>,
    topic_keywords: BTreeMap<Topic, Vec<String>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Lexicon::default())
    }
}

impl Classifier {
    /// Normalize every phrase of the lexicon once.
    ///
    /// Phrases that normalize to an empty string are dropped, since they
    /// would be contained in every input. `general` never gets triggers.
    pub fn new(lexicon: &Lexicon) -> Self {
        let normalizer = Normalizer::new();

        let mut intent_patterns: BTreeMap<Intent, Vec<String>> = BTreeMap::new();
        for (intent, phrases) in &lexicon.intent_patterns {
            if intent.is_general() {
                continue;
            }
            intent_patterns
                .entry(*intent)
                .or_default()
                .extend(normalized_non_empty(&normalizer, phrases));
        }

        let mut topic_keywords: BTreeMap<Topic, Vec<String>> = BTreeMap::new();
        for (topic, keywords) in &lexicon.topic_keywords {
            topic_keywords
                .entry(*topic)
                .or_default()
                .extend(normalized_non_empty(&normalizer, keywords));
        }

        Self {
            normalizer,
            intent_patterns,
            topic_keywords,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Best intent for the input; `general` when nothing matches.
    pub fn classify_intent(&self, input: &str) -> Intent {
        self.intent_of_normalized(&self.normalizer.normalize(input))
    }

    /// Best topic for the input, if any keyword matches.
    pub fn classify_topic(&self, input: &str) -> Option<Topic> {
        self.topic_of_normalized(&self.normalizer.normalize(input))
    }

    /// Density of recognized terms for the chosen intent and topic.
    pub fn confidence(&self, input: &str, intent: Intent, topic: Option<Topic>) -> f32 {
        self.confidence_of_normalized(&self.normalizer.normalize(input), intent, topic)
    }

    /// Run intent, topic and confidence on a single normalization.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let normalized = self.normalizer.normalize(input);
        let intent = self.intent_of_normalized(&normalized);
        let topic = self.topic_of_normalized(&normalized);
        let confidence = self.confidence_of_normalized(&normalized, intent, topic);

        let mut seen = HashSet::new();
        let matched_keywords: Vec<String> = self
            .intent_patterns
            .get(&intent)
            .into_iter()
            .flatten()
            .chain(topic.and_then(|t| self.topic_keywords.get(&t)).into_iter().flatten())
            .filter(|p| normalized.contains(p.as_str()) && seen.insert(p.as_str()))
            .cloned()
            .collect();

        ClassificationResult {
            intent,
            topic,
            confidence,
            normalized_input: normalized,
            matched_keywords,
        }
    }

    /// Per-intent scores in tie-break order (diagnostics and tests).
    pub fn intent_scores(&self, input: &str) -> Vec<(Intent, u32)> {
        let normalized = self.normalizer.normalize(input);
        self.intent_patterns
            .iter()
            .map(|(intent, patterns)| (*intent, score_intent_patterns(&normalized, patterns)))
            .collect()
    }

    /// Per-topic scores in tie-break order (diagnostics and tests).
    pub fn topic_scores(&self, input: &str) -> Vec<(Topic, u32)> {
        let normalized = self.normalizer.normalize(input);
        self.topic_keywords
            .iter()
            .map(|(topic, keywords)| (*topic, score_topic_keywords(&normalized, keywords)))
            .collect()
    }

    fn intent_of_normalized(&self, normalized: &str) -> Intent {
        pick_best(
            self.intent_patterns
                .iter()
                .map(|(intent, patterns)| (*intent, score_intent_patterns(normalized, patterns))),
        )
        .unwrap_or(Intent::General)
    }

    fn topic_of_normalized(&self, normalized: &str) -> Option<Topic> {
        pick_best(
            self.topic_keywords
                .iter()
                .map(|(topic, keywords)| (*topic, score_topic_keywords(normalized, keywords))),
        )
    }

    fn confidence_of_normalized(&self, normalized: &str, intent: Intent, topic: Option<Topic>) -> f32 {
        let intent_hits = self
            .intent_patterns
            .get(&intent)
            .map(|patterns| count_hits(normalized, patterns))
            .unwrap_or(0);

        let topic_hits = topic
            .and_then(|t| self.topic_keywords.get(&t))
            .map(|keywords| count_hits(normalized, keywords))
            .unwrap_or(0);

        let words = word_count(normalized).max(1);
        ((intent_hits + topic_hits) as f32 / words as f32).min(1.0)
    }
}

fn normalized_non_empty(normalizer: &Normalizer, phrases: &[String]) -> Vec<String> {
    normalizer
        .normalize_batch(phrases)
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_intent_exact_vs_contains() {
        let patterns = strings(&["علاج", "طرق علاج"]);
        assert_eq!(score_intent_patterns("علاج", &patterns), EXACT_MATCH_POINTS);
        assert_eq!(score_intent_patterns("طرق علاج الانتباه", &patterns), 2 * CONTAINS_POINTS);
        assert_eq!(score_intent_patterns("تعريف", &patterns), 0);
    }

    #[test]
    fn test_score_topic_rewards_word_count() {
        let single = strings(&["ذاكره"]);
        let double = strings(&["ذاكره عامله"]);
        let input = "تمارين ذاكره عامله";
        assert_eq!(score_topic_keywords(input, &single), 1);
        assert_eq!(score_topic_keywords(input, &double), 2);
    }

    #[test]
    fn test_pick_best_first_wins_ties() {
        assert_eq!(pick_best([("a", 2), ("b", 2), ("c", 1)].into_iter()), Some("a"));
        assert_eq!(pick_best([("a", 0), ("b", 0)].into_iter()), None);
        assert_eq!(pick_best([("a", 1), ("b", 3)].into_iter()), Some("b"));
    }

    #[test]
    fn test_treatment_question() {
        let classifier = Classifier::default();
        let result = classifier.classify("كيف أعالج مشاكل الإدراك؟");
        assert_eq!(result.intent, Intent::Treatment);
        assert_eq!(result.topic, Some(Topic::Perception));
        assert!(result.confidence > 0.7);
        assert!(result.matched_keywords.contains(&"كيف اعالج".to_string()));
    }

    #[test]
    fn test_definition_question() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify_intent("ما هو الانتباه الانتقائي؟"), Intent::Definition);
        assert_eq!(classifier.classify_topic("ما هو الانتباه الانتقائي؟"), Some(Topic::Attention));
    }

    #[test]
    fn test_empty_input() {
        let classifier = Classifier::default();
        let result = classifier.classify("   ");
        assert_eq!(result.intent, Intent::General);
        assert_eq!(result.topic, None);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_multi_word_keyword_decides_topic() {
        let lexicon = Lexicon::from_static(
            &[],
            &[(Topic::Perception, &["بصري"]), (Topic::Memory, &["ذاكرة بصرية"])],
        );
        let classifier = Classifier::new(&lexicon);
        // Both match; the two-word keyword scores 2 against 1.
        assert_eq!(classifier.classify_topic("ذاكرة بصرية"), Some(Topic::Memory));
    }

    #[test]
    fn test_general_triggers_are_ignored() {
        let lexicon = Lexicon::from_static(&[(Intent::General, &["مرحبا"])], &[]);
        let classifier = Classifier::new(&lexicon);
        assert_eq!(classifier.classify_intent("مرحبا"), Intent::General);
        assert!(classifier.intent_scores("مرحبا").is_empty());
    }

    #[test]
    fn test_empty_phrases_are_dropped() {
        let lexicon = Lexicon::from_static(&[(Intent::Causes, &["", "  "])], &[(Topic::Memory, &["ـ"])]);
        let classifier = Classifier::new(&lexicon);
        assert_eq!(classifier.classify_intent("اي شيء"), Intent::General);
        assert_eq!(classifier.classify_topic("اي شيء"), None);
    }

    #[test]
    fn test_confidence_without_topic_counts_intent_only() {
        let classifier = Classifier::default();
        // "علاج" is a trigger; one word, one hit.
        assert_eq!(classifier.confidence("علاج", Intent::Treatment, None), 1.0);
        assert_eq!(classifier.confidence("علاج", Intent::Causes, None), 0.0);
    }
}
