//! Tracing/logging initialization.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogConfig, LogFormat};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// filter falls back to the default one.
pub fn init(config: &LogConfig) {
    if try_init(config).is_err() {
        let fallback = LogConfig {
            filter: DEFAULT_FILTER.to_string(),
            ..config.clone()
        };
        let _ = try_init(&fallback);
    }
}

/// Install the global subscriber described by `config`.
pub fn try_init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter `{}`", config.filter))?;

    let installed = match config.format {
        // JSON logs + timestamps.
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some(raw) = &config.unrecognized_format {
        ::tracing::warn!(format = %raw, "unrecognized log format, using json");
    }

    Ok(())
}
