use core::str::FromStr;

/// Variable holding `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Variable selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "GILDED_ROSE_LOG_FORMAT";

/// Filter used when none is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info` or `gilded_rose_inventory=trace`.
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that could not be parsed; reported once logging is up.
    pub unrecognized_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            unrecognized_format: None,
        }
    }
}

impl LogConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Missing or blank values fall back to defaults. An unknown format falls
    /// back to JSON and is kept in `unrecognized_format`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|v| !v.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(_) => config.unrecognized_format = Some(raw),
            }
        }

        config
    }
}
