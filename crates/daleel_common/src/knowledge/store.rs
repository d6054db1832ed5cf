//! Read-only (topic, intent) -> response store.
//!
//! Loaded once, never mutated afterwards; share it behind an `Arc`.
//! Lookups that find nothing return `None`, never an error.

use super::pack::{KnowledgePack, BUILTIN_PACK};
use crate::error::KnowledgeError;
use crate::types::{Intent, Topic};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the store contents came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum KnowledgeSource {
    Builtin,
    File(PathBuf),
    /// Placeholder after a failed load, or an explicit empty store.
    Empty,
}

/// One stored answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub topic: Topic,
    pub intent: Intent,
    /// Fallback-search keywords (raw, not normalized)
    pub keywords: Vec<String>,
    pub response: String,
}

#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    topics: Vec<Topic>,
    entries: Vec<KnowledgeEntry>,
    source: KnowledgeSource,
}

impl KnowledgeStore {
    /// Store with no topics. Every question ends at the default response.
    pub fn empty() -> Self {
        Self {
            topics: Vec::new(),
            entries: Vec::new(),
            source: KnowledgeSource::Empty,
        }
    }

    /// The pack compiled into the crate.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        let mut store = Self::from_toml_str(BUILTIN_PACK)?;
        store.source = KnowledgeSource::Builtin;
        Ok(store)
    }

    /// Parse a resource held in memory.
    pub fn from_toml_str(text: &str) -> Result<Self, KnowledgeError> {
        let pack = KnowledgePack::parse(text)?;
        Self::from_pack(pack)
    }

    /// Build from a parsed pack, keeping resource order.
    pub fn from_pack(pack: KnowledgePack) -> Result<Self, KnowledgeError> {
        let mut topics: Vec<Topic> = Vec::new();
        let mut entries: Vec<KnowledgeEntry> = Vec::new();

        for section in pack.topics {
            if !topics.contains(&section.key) {
                topics.push(section.key);
            }
            for entry in section.entries {
                if entries
                    .iter()
                    .any(|e| e.topic == section.key && e.intent == entry.intent)
                {
                    return Err(KnowledgeError::DuplicateEntry {
                        topic: section.key.to_string(),
                        intent: entry.intent.to_string(),
                    });
                }
                entries.push(KnowledgeEntry {
                    topic: section.key,
                    intent: entry.intent,
                    keywords: entry.keywords,
                    response: entry.response,
                });
            }
        }

        Ok(Self {
            topics,
            entries,
            source: KnowledgeSource::Empty,
        })
    }

    /// Load a resource from disk. Missing, unreadable or malformed files fail.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut store = Self::from_toml_str(&text)?;
        store.source = KnowledgeSource::File(path.to_path_buf());

        info!(
            path = %path.display(),
            topics = store.topics.len(),
            entries = store.entries.len(),
            "knowledge resource loaded"
        );
        Ok(store)
    }

    /// Load a resource, degrading to an empty store instead of failing.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    kind = e.kind(),
                    error = %e,
                    "knowledge resource unavailable, continuing with empty knowledge"
                );
                Self::empty()
            }
        }
    }

    pub fn source(&self) -> &KnowledgeSource {
        &self.source
    }

    /// Stored response for (topic, intent).
    pub fn response_for(&self, topic: Topic, intent: Intent) -> Option<&str> {
        self.entry(topic, intent).map(|e| e.response.as_str())
    }

    /// Topics in resource order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Intents stored for a topic, in resource order. Empty for unknown topics.
    pub fn intents_for(&self, topic: Topic) -> Vec<Intent> {
        self.entries
            .iter()
            .filter(|e| e.topic == topic)
            .map(|e| e.intent)
            .collect()
    }

    /// Fallback keywords of one entry.
    pub fn keywords_for(&self, topic: Topic, intent: Intent) -> Option<&[String]> {
        self.entry(topic, intent).map(|e| e.keywords.as_slice())
    }

    pub fn entry(&self, topic: Topic, intent: Intent) -> Option<&KnowledgeEntry> {
        self.entries
            .iter()
            .find(|e| e.topic == topic && e.intent == intent)
    }

    /// Every entry, in store iteration order.
    pub fn entries(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter()
    }

    pub fn covers(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
