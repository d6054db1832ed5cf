//! Property-based tests for normalization, classification and resolution.

use proptest::prelude::*;
use std::sync::Arc;

use daleel_common::knowledge::KnowledgeStore;
use daleel_common::normalizer::normalize;
use daleel_common::resolver::Resolver;
use daleel_common::{Classifier, Intent, Topic};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Arabic letters and marks, Latin, whitespace and Arabic punctuation.
fn arb_arabic_text() -> impl Strategy<Value = String> {
    "[\\x{0621}-\\x{0652}\\x{0640}\\x{0670} a-zA-Z\\t\\n؟،]{0,48}"
}

fn arb_known_phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("كيف أعالج".to_string()),
        Just("تعريف".to_string()),
        Just("أنواع".to_string()),
        Just("الذاكرة".to_string()),
        Just("الإدراك".to_string()),
        Just("الانتباه الانتقائي".to_string()),
        Just("الإملاء".to_string()),
        Just("مشاكل".to_string()),
    ]
}

fn arb_question() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![arb_known_phrase(), arb_arabic_text()], 0..5)
        .prop_map(|parts| parts.join(" "))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalize_is_idempotent(text in arb_arabic_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_leaves_no_hamza_alef_or_marks(text in arb_arabic_text()) {
        let out = normalize(&text);
        prop_assert!(!out.contains(&['أ', 'إ', 'آ', 'ى', 'ة', 'ؤ', 'ئ', '\u{0640}'][..]), "output contains unnormalized alef/ya/ta-marbuta/hamza/tatweel: {:?}", out);
        prop_assert!(!out.chars().any(|c| ('\u{064B}'..='\u{0652}').contains(&c)), "output contains tashkeel: {:?}", out);
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn confidence_is_bounded(question in arb_question()) {
        let result = Classifier::default().classify(&question);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!(Intent::ALL.contains(&result.intent));
        if let Some(topic) = result.topic {
            prop_assert!(Topic::ALL.contains(&topic));
        }
    }

    #[test]
    fn resolve_always_answers(question in arb_question()) {
        let store = Arc::new(KnowledgeStore::builtin().unwrap());
        let resolution = Resolver::new(store).resolve(&question);
        prop_assert!(!resolution.text.is_empty());
    }

    #[test]
    fn classification_is_deterministic(question in arb_question()) {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&question), classifier.classify(&question));
    }
}
