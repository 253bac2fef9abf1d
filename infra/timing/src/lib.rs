//! # Timing
//!
//! Named timings for automation runs. Each run owns a [`Timer`]; phases are
//! measured with [`Timer::start`]/[`Timer::end`] or wrapped with [`Timer::time`].
//!
//! ```rust
//! use proctor_timing::Timer;
//!
//! let mut timer = Timer::new();
//! let sum = timer.time("setup", || 2 + 2)?;
//! assert_eq!(sum, 4);
//! assert!(timer.entry("setup").and_then(|e| e.duration()).is_some());
//! # Ok::<(), proctor_timing::TimingError>(())
//! ```

mod entry;
mod error;
mod timer;

pub use entry::TimeEntry;
pub use error::{TimingError, TimingErrorExt};
pub use timer::Timer;
