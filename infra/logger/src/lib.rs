//! # Logger
//!
//! Logging for automation runs, in two parts:
//!
//! * [`Logger`]: a per-run logger with a level filter and an inspectable [`LogRecord`].
//!   Every run owns its own; accepted messages are also emitted as `tracing` events.
//! * [`Subscriber`]: one-time setup of the process-wide `tracing` subscriber with
//!   console output, optional rolling files (`tracing-appender`, plain or JSON) and
//!   `RUST_LOG`-style filtering.
//!
//! ## Example
//!
//! ```rust
//! use proctor_logger::{LogLevel, Logger};
//!
//! let mut logger = Logger::new(LogLevel::Warning);
//! assert!(!logger.info("skipped"));
//! assert!(logger.warning("kept"));
//! assert_eq!(logger.record().len(), 1);
//! ```
//!
//! ```rust,no_run
//! use proctor_logger::{LogLevel, Subscriber};
//!
//! let _guard = Subscriber::builder()
//!     .name("nightly")
//!     .level(LogLevel::Debug)
//!     .run_level(LogLevel::Info)
//!     .path("logs")
//!     .init()?;
//! # Ok::<(), proctor_logger::LoggerError>(())
//! ```

mod error;
mod logger;
mod record;
mod subscriber;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::logger::{Logger, RUN_TARGET};
pub use crate::record::{LogEntry, LogRecord};
pub use crate::subscriber::{
    NoFile, NoName, Subscriber, SubscriberBuilder, SubscriberGuard, WithFile, WithName,
};
pub use proctor_domain::LogLevel;
pub use tracing_appender::rolling::Rotation;
