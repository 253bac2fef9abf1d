//! Facade crate for Proctor.
//! Re-exports the automator types plus the domain, kernel, logging and timing crates.
//! Keep this crate thin: it composes other crates and does not implement behavior.
//!
//! ## Usage
//! ```rust
//! use proctor::prelude::*;
//!
//! let mut result = AutomationResult::new(Config::builder().log_level(LogLevel::Info).build());
//! result.logger_mut().info("started");
//! result.error();
//! assert!(result.is_error());
//! ```

pub use proctor_automator as automator;
pub use proctor_domain as domain;
pub use proctor_kernel as kernel;
pub use proctor_logger as logger;
pub use proctor_timing as timing;

pub use proctor_automator::{
    AutomationResult, AutomatorError, AutomatorSettings, Config, ConfigBuilder, DataKey, DataLog,
    ResultReport,
};

/// Everything a typical automation needs in scope.
pub mod prelude {
    pub use proctor_automator::{
        AutomationResult, AutomatorError, AutomatorErrorExt, AutomatorSettings, Config, DataLog,
    };
    pub use proctor_domain::{Flags, LogLevel, RunId, Status};
    pub use proctor_logger::{Logger, Subscriber};
    pub use proctor_timing::Timer;
}
