use std::path::PathBuf;

use crate::log::{
    error::ConfigureError,
    log_level::LogLevel,
    logger::{DEFAULT_CALL_DEPTH, DEFAULT_LOG_DIR, Logger},
    sink_flag::SinkFlag,
};

/// Everything needed to set up a [`Logger`] in one value.
///
/// Field values parse from strings (`"console-file"`, `"warning"`, ...), so a
/// command line can fill it in directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Log file stem; empty selects `default`.
    pub name: String,
    pub sinks: SinkFlag,
    pub level: LogLevel,
    pub call_depth: i32,
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            sinks: SinkFlag::CONSOLE,
            level: LogLevel::Trace,
            call_depth: DEFAULT_CALL_DEPTH,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, sinks: SinkFlag, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            sinks,
            level,
            ..Self::default()
        }
    }

    /// Builds a fresh logger in this configuration. Setup failures are
    /// reported on standard error, as with [`Logger::configure`].
    #[must_use]
    pub fn build(&self) -> Logger {
        let logger = Logger::builder()
            .log_dir(&self.log_dir)
            .call_depth(self.call_depth)
            .build();
        logger.configure(&self.name, self.sinks, self.level);
        logger
    }

    /// Applies sinks, threshold and call depth to an existing logger.
    ///
    /// The logger keeps its own log directory.
    ///
    /// # Errors
    /// Same as [`Logger::try_configure`].
    pub fn apply(&self, logger: &Logger) -> Result<(), ConfigureError> {
        logger.set_call_depth(self.call_depth);
        logger.try_configure(&self.name, self.sinks, self.level)
    }
}
