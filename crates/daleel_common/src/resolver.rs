//! Response resolver.
//!
//! Turns a classification into an answer. Strategies are tried in a fixed
//! order and the first one that produces text wins:
//!
//! 1. `Direct`: confident, topic known, stored entry for (topic, intent).
//!    The answer gets related follow-up suggestions appended.
//! 2. `TopicAnchored`: topic known with moderate confidence. The classified
//!    intent is tried first, then treatment, definition, types, symptoms;
//!    an answer reached through that list carries a "related information"
//!    notice.
//! 3. `FallbackSearch`: keyword scan over every stored entry.
//! 4. `Default`: a "didn't understand" reply with example questions.
//!
//! The resolver holds no per-session state and can be shared between
//! conversations.

use crate::classifier::{ClassificationResult, Classifier};
use crate::knowledge::{FallbackIndex, KnowledgeStore};
use crate::suggestions;
use crate::types::{Intent, Topic};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Confidence gates and output limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Confidence above which a stored (topic, intent) answer is used directly
    #[serde(default = "default_direct_threshold")]
    pub direct_threshold: f32,
    /// Confidence above which the topic alone is trusted
    #[serde(default = "default_topic_threshold")]
    pub topic_threshold: f32,
    /// Maximum follow-up bullets appended to a direct answer
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_direct_threshold() -> f32 {
    0.7
}

fn default_topic_threshold() -> f32 {
    0.5
}

fn default_max_suggestions() -> usize {
    3
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            direct_threshold: default_direct_threshold(),
            topic_threshold: default_topic_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Which strategy produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Direct,
    TopicAnchored,
    FallbackSearch,
    Default,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::TopicAnchored => "topic_anchored",
            Self::FallbackSearch => "fallback_search",
            Self::Default => "default",
        }
    }

    /// Did the answer come from the knowledge store?
    pub fn is_answer(&self) -> bool {
        !matches!(self, Self::Default)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved answer for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub text: String,
    pub strategy: Strategy,
    pub classification: ClassificationResult,
    /// Store entry the text was taken from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<(Topic, Intent)>,
}

pub struct Resolver {
    store: Arc<KnowledgeStore>,
    classifier: Classifier,
    index: FallbackIndex,
    settings: ResolverSettings,
}

impl Resolver {
    /// Resolver with the default lexicon and settings.
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self::with_parts(store, Classifier::default(), ResolverSettings::default())
    }

    pub fn with_parts(
        store: Arc<KnowledgeStore>,
        classifier: Classifier,
        settings: ResolverSettings,
    ) -> Self {
        let index = FallbackIndex::build(&store, classifier.normalizer());
        Self {
            store,
            classifier,
            index,
            settings,
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Classify and answer one input. Never fails.
    pub fn resolve(&self, input: &str) -> Resolution {
        let classification = self.classifier.classify(input);

        let (text, strategy, source) = self
            .direct(&classification)
            .map(|(text, src)| (text, Strategy::Direct, Some(src)))
            .or_else(|| {
                self.topic_anchored(&classification)
                    .map(|(text, src)| (text, Strategy::TopicAnchored, Some(src)))
            })
            .or_else(|| {
                self.fallback(&classification)
                    .map(|(text, src)| (text, Strategy::FallbackSearch, Some(src)))
            })
            .unwrap_or_else(|| {
                (
                    suggestions::default_response(classification.intent, classification.topic),
                    Strategy::Default,
                    None,
                )
            });

        debug!(
            intent = %classification.intent,
            topic = ?classification.topic,
            confidence = classification.confidence,
            strategy = %strategy,
            "question resolved"
        );

        Resolution {
            text,
            strategy,
            classification,
            source,
        }
    }

    /// Detected topic, only when the store has something for it.
    pub fn covered_topic(&self, input: &str) -> Option<Topic> {
        self.classifier
            .classify_topic(input)
            .filter(|topic| self.store.covers(*topic))
    }

    fn direct(&self, c: &ClassificationResult) -> Option<(String, (Topic, Intent))> {
        if c.confidence <= self.settings.direct_threshold {
            return None;
        }
        let topic = c.topic?;
        let response = self.store.response_for(topic, c.intent)?;

        let text = suggestions::append_suggestions(
            response,
            suggestions::related_suggestions(topic, c.intent),
            self.settings.max_suggestions,
        );
        Some((text, (topic, c.intent)))
    }

    fn topic_anchored(&self, c: &ClassificationResult) -> Option<(String, (Topic, Intent))> {
        let topic = c.topic?;
        if c.confidence <= self.settings.topic_threshold {
            return None;
        }

        if !c.intent.is_general() {
            if let Some(response) = self.store.response_for(topic, c.intent) {
                return Some((response.to_string(), (topic, c.intent)));
            }
        }

        Intent::TOPIC_FALLBACK_ORDER.iter().find_map(|intent| {
            self.store.response_for(topic, *intent).map(|response| {
                (
                    suggestions::with_related_info_notice(topic, response),
                    (topic, *intent),
                )
            })
        })
    }

    fn fallback(&self, c: &ClassificationResult) -> Option<(String, (Topic, Intent))> {
        let hit = self.index.search(&c.normalized_input)?;
        let response = self.store.response_for(hit.topic, hit.intent)?;
        Some((response.to_string(), (hit.topic, hit.intent)))
    }
}
