use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// One named timing within a run.
///
/// Wall-clock stamps are kept for reporting; the duration itself comes from a
/// monotonic clock so it is immune to system clock changes.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    name: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    #[serde(rename = "duration_ms", serialize_with = "millis")]
    elapsed: Option<Duration>,
    #[serde(skip)]
    started: Instant,
}

impl TimeEntry {
    pub(crate) fn start(name: String) -> Self {
        Self { name, started_at: Utc::now(), ended_at: None, elapsed: None, started: Instant::now() }
    }

    pub(crate) fn finish(&mut self) -> Duration {
        let elapsed = self.started.elapsed();
        self.ended_at = Some(Utc::now());
        self.elapsed = Some(elapsed);
        elapsed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub const fn is_running(&self) -> bool {
        self.elapsed.is_none()
    }

    /// Final duration once ended, `None` while still running.
    pub const fn duration(&self) -> Option<Duration> {
        self.elapsed
    }
}

#[allow(clippy::ref_option)]
fn millis<S: Serializer>(elapsed: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match elapsed {
        Some(d) => serializer.serialize_some(&(d.as_secs_f64() * 1000.0)),
        None => serializer.serialize_none(),
    }
}
