use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the trellis crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trellis=trace",
            LogLevel::Debug => "trellis=debug",
            LogLevel::Info => "trellis=info",
            LogLevel::Warn => "trellis=warn",
            LogLevel::Error => "trellis=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
