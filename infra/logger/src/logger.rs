use crate::record::{LogEntry, LogRecord};
use chrono::Utc;
use proctor_domain::LogLevel;

/// `tracing` target of events mirrored from run loggers.
pub const RUN_TARGET: &str = "proctor::run";

/// Logger owned by a single automation run.
///
/// Messages at or above the configured level are appended to the run's [`LogRecord`]
/// and mirrored as `tracing` events, so they also reach whatever subscriber the
/// host installed. Messages below the level are dropped.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    level: LogLevel,
    record: LogRecord,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level, record: LogRecord::default() }
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    pub const fn record(&self) -> &LogRecord {
        &self.record
    }

    /// Records `message` at `level` if the logger's level allows it.
    ///
    /// Returns `true` when the message was recorded.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) -> bool {
        if !self.level.allows(level) {
            return false;
        }

        let message = message.into();
        match level {
            LogLevel::Debug => tracing::debug!(target: RUN_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: RUN_TARGET, "{message}"),
            LogLevel::Warning => tracing::warn!(target: RUN_TARGET, "{message}"),
            LogLevel::Error => tracing::error!(target: RUN_TARGET, "{message}"),
            LogLevel::Fatal => tracing::error!(target: RUN_TARGET, fatal = true, "{message}"),
        }

        self.record.push(LogEntry { level, timestamp: Utc::now(), message });
        true
    }

    pub fn debug(&mut self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Info, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Error, message)
    }

    pub fn fatal(&mut self, message: impl Into<String>) -> bool {
        self.log(LogLevel::Fatal, message)
    }
}
