//! Error types for Daleel.
//!
//! Only resource loading can fail. Classification and resolution never
//! return errors: "nothing found" is an `Option::None` at every layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaleelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Knowledge resource parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate knowledge entry for topic '{topic}' and intent '{intent}'")]
    DuplicateEntry { topic: String, intent: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DaleelError {
    /// Short stable label, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DaleelError::Io(_) => "io",
            DaleelError::Parse(_) => "parse",
            DaleelError::DuplicateEntry { .. } => "duplicate_entry",
            DaleelError::Config(_) => "config",
        }
    }
}

/// Errors raised while loading a knowledge resource.
pub type KnowledgeError = DaleelError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = DaleelError::DuplicateEntry {
            topic: "memory".to_string(),
            intent: "treatment".to_string(),
        };
        assert_eq!(err.kind(), "duplicate_entry");
        assert!(err.to_string().contains("memory"));

        let io = DaleelError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.kind(), "io");
    }
}
