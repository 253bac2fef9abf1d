//! Kernel utilities shared across crates.
//! Keep this crate lightweight; it exposes helpers for run ids and settings loading.
//!
//! ## Run ids
//! ```rust
//! # use proctor_kernel::new_run_id;
//! let id = new_run_id();
//! assert_eq!(id.as_str().len(), 36);
//! ```
//!
//! ## Settings loading
//! ```rust,no_run
//! use proctor_kernel::config::load_config;
//!
//! #[derive(Default, serde::Deserialize)]
//! struct Settings {
//!     log_level: Option<String>,
//! }
//!
//! let settings: Settings = load_config(Some("config/proctor")).unwrap_or_default();
//! ```
pub mod config;

pub use proctor_domain as domain;

use proctor_domain::RunId;
use uuid::Uuid;

/// Generates a fresh random run id (UUID v4, hyphenated lower case).
pub fn new_run_id() -> RunId {
    RunId::from(Uuid::new_v4().hyphenated().to_string())
}
