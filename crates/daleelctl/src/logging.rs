//! Tracing subscriber setup.
//!
//! Logs go to stderr; answers on stdout stay clean for piping.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Filter directive used when RUST_LOG is unset.
pub fn default_directive(configured: &str) -> &str {
    let level = configured.trim();
    if level.is_empty() {
        DEFAULT_LEVEL
    } else {
        level
    }
}

/// Install the global subscriber. RUST_LOG wins over the configured level.
pub fn init(configured_level: &str) -> Result<()> {
    let directive = default_directive(configured_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(""), "warn");
        assert_eq!(default_directive("  "), "warn");
        assert_eq!(default_directive("debug"), "debug");
        assert_eq!(default_directive(" daleel_common=info "), "daleel_common=info");
    }
}
