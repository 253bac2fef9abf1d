use crate::config::Config;
use crate::data_log::{DataKey, DataLog};
use crate::error::Result;
use proctor_domain::{Flags, LogLevel, RunId, Status};
use proctor_logger::{LogRecord, Logger};
use proctor_timing::{TimeEntry, Timer};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Accumulated outcome of one automation run.
///
/// Every result starts as [`Status::Success`] and owns a fresh [`Logger`] (at the
/// config's level) and an idle [`Timer`]. The status can leave `Success` only once:
/// whichever of [`Self::failure`] or [`Self::error`] is called first decides it.
#[derive(Debug)]
pub struct AutomationResult {
    config: Arc<Config>,
    status: Status,
    logger: Logger,
    timer: Timer,
    data_log: DataLog,
}

impl AutomationResult {
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        let config = config.into();
        debug!(run_id = %config.id(), level = %config.log_level(), "Automation result created");

        Self {
            logger: Logger::new(config.log_level()),
            timer: Timer::new(),
            status: Status::Success,
            data_log: DataLog::default(),
            config,
        }
    }

    pub fn id(&self) -> &RunId {
        self.config.id()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The shared config handle, for creating sibling results.
    pub fn shared_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    pub const fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    pub const fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    pub const fn data_log(&self) -> &DataLog {
        &self.data_log
    }

    /// Records `value` under `key` in the data log, overwriting any previous value.
    ///
    /// Returns the value now stored at `key`.
    ///
    /// # Errors
    /// Returns [`crate::AutomatorError::InvalidArgument`] if `key` is absent (`None`).
    pub fn record_data(&mut self, key: impl DataKey, value: impl Into<Value>) -> Result<&Value> {
        self.data_log.insert(key, value.into())
    }

    /// Marks the run as failed (an assertion did not hold). Returns the resulting status.
    pub fn failure(&mut self) -> Status {
        self.request(Status::Failure)
    }

    /// Marks the run as errored (something unexpected happened). Returns the resulting status.
    pub fn error(&mut self) -> Status {
        self.request(Status::Error)
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == Status::Failure
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Times `f` under `name` with this run's timer.
    ///
    /// # Errors
    /// Returns [`crate::AutomatorError::Timing`] if `name` is already running.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> Result<T> {
        Ok(self.timer.time(name, f)?)
    }

    /// A serializable snapshot of everything recorded so far.
    pub fn report(&self) -> ResultReport<'_> {
        ResultReport {
            id: self.config.id(),
            status: self.status,
            log_level: self.config.log_level(),
            flags: self.config.flags(),
            data: &self.data_log,
            log: self.logger.record(),
            timings: self.timer.entries(),
        }
    }

    fn request(&mut self, requested: Status) -> Status {
        let next = self.status.transition(requested);
        if next == self.status {
            debug!(run_id = %self.id(), status = %self.status, requested = %requested, "Status unchanged");
        } else {
            info!(run_id = %self.id(), from = %self.status, to = %next, "Run status changed");
            self.status = next;
        }
        self.status
    }
}

/// Borrowed, serializable view of an [`AutomationResult`].
#[derive(Debug, Serialize)]
pub struct ResultReport<'a> {
    pub id: &'a RunId,
    pub status: Status,
    pub log_level: LogLevel,
    pub flags: &'a Flags,
    pub data: &'a DataLog,
    pub log: &'a LogRecord,
    pub timings: &'a [TimeEntry],
}
