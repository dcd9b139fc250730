use crate::{DEFAULT_LOG_LEVEL, LogLevel};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
        }
    }
}
