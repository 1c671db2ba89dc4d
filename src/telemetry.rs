//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` accepts any `EnvFilter` directive string. An unparseable
/// directive falls back to `info`. `log_format` selects `json` output,
/// anything else gives human-readable text.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    }
}
