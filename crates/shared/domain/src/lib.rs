//! # Domain Models
//!
//! Pure types shared by every automation crate: log levels, flags, run status and run ids.
//! Keep it lean: no I/O and no behavior beyond the invariants these types carry.

pub mod flags;
pub mod id;
pub mod level;
pub mod status;

pub use flags::Flags;
pub use id::RunId;
pub use level::LogLevel;
pub use status::Status;
