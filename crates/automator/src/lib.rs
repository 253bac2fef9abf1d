//! # Automator
//!
//! Configuration and outcome tracking for automation runs.
//!
//! * [`Config`]: id, log level and flags, built permissively through [`Config::builder`].
//! * [`AutomationResult`]: status, per-run logger and timer, and a key/value [`DataLog`].
//! * [`AutomatorSettings`]: file/environment-driven input for a [`Config`].
//!
//! ## Example
//!
//! ```rust
//! use proctor_automator::{AutomationResult, Config, LogLevel, Status};
//!
//! let config = Config::builder()
//!     .id("checkout-smoke")
//!     .log_level(LogLevel::Info)
//!     .flag_map([("headless", true)])
//!     .build();
//!
//! let mut result = AutomationResult::new(config);
//! result.record_data("cart_items", 3)?;
//! result.logger_mut().info("cart verified");
//!
//! assert_eq!(result.failure(), Status::Failure);
//! assert_eq!(result.error(), Status::Failure);
//! # Ok::<(), proctor_automator::AutomatorError>(())
//! ```

mod config;
mod data_log;
mod error;
mod result;
mod settings;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::data_log::{DataKey, DataLog};
pub use crate::error::{AutomatorError, AutomatorErrorExt, Result};
pub use crate::result::{AutomationResult, ResultReport};
pub use crate::settings::AutomatorSettings;
pub use proctor_domain::{Flags, LogLevel, RunId, Status};
