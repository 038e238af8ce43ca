use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output for TTY; ignored when logging to a file.
    pub colored: bool,
    /// Directory for log files, relative to the config directory.
    pub dir: String,
    /// Optional log file name inside `dir`. None = stdout only.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}
