//! Knowledge base: resource format, read-only store and fallback search.

pub mod pack;
pub mod retrieval;
pub mod store;

pub use pack::{KnowledgePack, BUILTIN_PACK};
pub use retrieval::{FallbackHit, FallbackIndex};
pub use store::{KnowledgeEntry, KnowledgeSource, KnowledgeStore};
