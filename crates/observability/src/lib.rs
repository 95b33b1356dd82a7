//! Tracing and logging (shared setup).

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide tracing/logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}

/// Like [`init`], but with an explicit configuration and reporting failures.
pub fn try_init(config: &LogConfig) -> anyhow::Result<()> {
    tracing::try_init(config)
}
