//! Self-test: built-in classification check.
//!
//! Runs a fixed set of questions through the classifier and compares the
//! detected intent and topic with the expected ones. Offline and
//! deterministic.

use crate::classifier::Classifier;
use crate::types::{Intent, Topic};
use serde::Serialize;

/// Accuracy (percent) at or above which the classifier counts as healthy.
pub const HEALTHY_ACCURACY: f32 = 80.0;

/// (question, expected intent, expected topic)
pub const SELFTEST_CASES: &[(&str, Intent, Topic)] = &[
    ("كيف أعالج مشاكل الإدراك؟", Intent::Treatment, Topic::Perception),
    ("ما هو الانتباه الانتقائي؟", Intent::Definition, Topic::Attention),
    ("طرق تحسين الذاكرة العاملة", Intent::Treatment, Topic::Memory),
    ("كيف أحل مشكلة الإملاء؟", Intent::Treatment, Topic::Writing),
];

/// Result of one self-test question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub question: String,
    pub expected_intent: Intent,
    pub expected_topic: Topic,
    pub intent: Intent,
    pub topic: Option<Topic>,
    pub confidence: f32,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.intent == self.expected_intent && self.topic == Some(self.expected_topic)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfTestReport {
    pub cases: Vec<CaseOutcome>,
    /// Percentage of passed cases (0 - 100)
    pub accuracy: f32,
}

impl SelfTestReport {
    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn is_healthy(&self) -> bool {
        self.accuracy >= HEALTHY_ACCURACY
    }
}

/// Run the built-in cases.
pub fn run_selftest(classifier: &Classifier) -> SelfTestReport {
    run_cases(classifier, SELFTEST_CASES)
}

/// Run arbitrary cases; an empty set scores zero.
pub fn run_cases(classifier: &Classifier, cases: &[(&str, Intent, Topic)]) -> SelfTestReport {
    let outcomes: Vec<CaseOutcome> = cases
        .iter()
        .map(|(question, expected_intent, expected_topic)| {
            let result = classifier.classify(question);
            CaseOutcome {
                question: question.to_string(),
                expected_intent: *expected_intent,
                expected_topic: *expected_topic,
                intent: result.intent,
                topic: result.topic,
                confidence: result.confidence,
            }
        })
        .collect();

    let passed = outcomes.iter().filter(|c| c.passed()).count();
    let accuracy = if outcomes.is_empty() {
        0.0
    } else {
        passed as f32 * 100.0 / outcomes.len() as f32
    };

    SelfTestReport {
        cases: outcomes,
        accuracy,
    }
}
