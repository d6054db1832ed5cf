//! Daleel core: a rule-based Arabic question-answering engine for
//! learning-disability topics.
//!
//! Pipeline: raw input -> normalizer -> classifier (intent, topic,
//! confidence) -> resolver (knowledge store, confidence-gated strategies)
//! -> response text, recorded in a per-session conversation log.

pub mod classifier;
pub mod config;
pub mod conversation;
pub mod error;
pub mod knowledge;
pub mod lexicon;
pub mod normalizer;
pub mod resolver;
pub mod selftest;
pub mod suggestions;
pub mod types;

pub use classifier::{ClassificationResult, Classifier};
pub use config::DaleelConfig;
pub use conversation::{Conversation, ConversationLog, ConversationTurn};
pub use error::{DaleelError, KnowledgeError};
pub use knowledge::{KnowledgeEntry, KnowledgeSource, KnowledgeStore};
pub use lexicon::Lexicon;
pub use normalizer::{normalize, Normalizer};
pub use resolver::{Resolution, Resolver, ResolverSettings, Strategy};
pub use selftest::{run_selftest, SelfTestReport};
pub use types::{Intent, Topic};

/// Version of the Daleel crates
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
