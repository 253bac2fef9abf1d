use crate::entry::TimeEntry;
use crate::error::TimingError;
use std::time::Duration;
use tracing::trace;

/// Collects named timings for one automation run.
///
/// A freshly created timer has nothing running; callers start and end entries
/// around the phases they want measured.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    entries: Vec<TimeEntry>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing `name`.
    ///
    /// Starting a name whose previous timing already ended replaces that entry.
    ///
    /// # Errors
    /// Returns [`TimingError::AlreadyRunning`] if `name` is currently running.
    pub fn start(&mut self, name: impl Into<String>) -> Result<(), TimingError> {
        let name = name.into();
        if let Some(pos) = self.position(&name) {
            if self.entries[pos].is_running() {
                return Err(TimingError::AlreadyRunning { name, context: None });
            }
            self.entries.remove(pos);
        }

        trace!(timing = %name, "Timing started");
        self.entries.push(TimeEntry::start(name));
        Ok(())
    }

    /// Ends timing `name` and returns its duration.
    ///
    /// # Errors
    /// Returns [`TimingError::NotStarted`] if `name` was never started or already ended.
    pub fn end(&mut self, name: &str) -> Result<Duration, TimingError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name() == name && e.is_running())
            .ok_or_else(|| TimingError::NotStarted { name: name.to_owned(), context: None })?;

        let elapsed = entry.finish();
        trace!(timing = %name, elapsed_ms = elapsed.as_millis(), "Timing ended");
        Ok(elapsed)
    }

    /// Times `f` under `name`, returning its output.
    ///
    /// # Errors
    /// Returns [`TimingError::AlreadyRunning`] if `name` is already running.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> Result<T, TimingError> {
        self.start(name)?;
        let output = f();
        self.end(name)?;
        Ok(output)
    }

    pub fn entry(&self, name: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// All entries in the order they were started.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.entry(name).is_some_and(TimeEntry::is_running)
    }

    /// Sum of all finished durations.
    pub fn total(&self) -> Duration {
        self.entries.iter().filter_map(TimeEntry::duration).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name() == name)
    }
}
