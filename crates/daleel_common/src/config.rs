//! Daleel configuration.
//!
//! Config file: ~/.config/daleel/config.toml or /etc/daleel/config.toml.
//! Every field has a default, so a partial file is fine.

use crate::error::DaleelError;
use crate::knowledge::KnowledgeStore;
use crate::resolver::ResolverSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the knowledge resource lives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Knowledge resource path; the bundled resource when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main Daleel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaleelConfig {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub resolver: ResolverSettings,

    #[serde(default)]
    pub log: LogConfig,
}

impl DaleelConfig {
    /// User config path: $XDG_CONFIG_HOME/daleel/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("daleel").join("config.toml"))
    }

    /// System config path: /etc/daleel/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/daleel/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config
    /// 3. System config
    /// 4. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate one file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: DaleelConfig = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Thresholds must lie in [0, 1] with topic <= direct.
    pub fn validate(&self) -> Result<(), DaleelError> {
        let r = &self.resolver;
        for (name, value) in [
            ("resolver.direct_threshold", r.direct_threshold),
            ("resolver.topic_threshold", r.topic_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DaleelError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        if r.topic_threshold > r.direct_threshold {
            return Err(DaleelError::Config(format!(
                "resolver.topic_threshold ({}) must not exceed resolver.direct_threshold ({})",
                r.topic_threshold, r.direct_threshold
            )));
        }
        Ok(())
    }

    /// The configured store: a file path degrades to empty, no path is bundled.
    pub fn open_store(&self) -> KnowledgeStore {
        match &self.knowledge.path {
            Some(path) => KnowledgeStore::load_or_empty(path),
            None => KnowledgeStore::builtin().unwrap_or_else(|e| {
                warn!(error = %e, "bundled knowledge unreadable, continuing with empty knowledge");
                KnowledgeStore::empty()
            }),
        }
    }
}
