use crate::log_level::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level emitted by the logger.
    pub level: LogLevel,
    /// Colorize console output.
    pub colored: bool,
    /// Directory for log files, relative to the config directory.
    pub dir: String,
    /// Log file name. None disables file logging.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: false,
            dir: crate::DEFAULT_LOG_DIRECTORY.to_string(),
            file: None,
        }
    }
}
