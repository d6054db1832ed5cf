//! Knowledge resource format and the bundled pack.
//!
//! A resource is TOML: an ordered list of `[[topic]]` tables, each holding
//! an ordered list of `[[topic.entry]]` tables. File order is kept.
//!
//! ```toml
//! [[topic]]
//! key = "memory"
//!
//! [[topic.entry]]
//! intent = "treatment"
//! keywords = ["علاج الذاكرة", "تقوية الذاكرة"]
//! response = '''...'''
//! ```

use crate::types::{Intent, Topic};
use serde::{Deserialize, Serialize};

/// Bundled knowledge base shipped with the crate.
pub const BUILTIN_PACK: &str = include_str!("../../data/knowledge.toml");

/// Root of a knowledge resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgePack {
    #[serde(default, rename = "topic")]
    pub topics: Vec<TopicSection>,
}

/// One topic and its entries, in resource order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSection {
    pub key: Topic,
    #[serde(default, rename = "entry")]
    pub entries: Vec<EntrySection>,
}

/// One (topic, intent) record as written in the resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySection {
    pub intent: Intent,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
}

impl KnowledgePack {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
