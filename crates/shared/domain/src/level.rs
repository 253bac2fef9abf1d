use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::level_filters::LevelFilter;

/// Verbosity of a run logger, ordered from most to least verbose.
///
/// A logger configured at a given level accepts messages at that level and above,
/// so [`LogLevel::Error`] is the most restrictive level that still records failures.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
    Fatal,
}

impl LogLevel {
    /// Every recognized level, in ascending order of severity.
    pub const ALL: [Self; 5] = [Self::Debug, Self::Info, Self::Warning, Self::Error, Self::Fatal];

    /// Level used whenever none (or an unrecognized one) is supplied.
    pub const DEFAULT: Self = Self::Error;

    /// Resolves an optional level name to a member of the set.
    ///
    /// Names are matched case-insensitively. Anything that is not a recognized
    /// name, including `None`, resolves to [`LogLevel::DEFAULT`].
    pub fn coerce(name: Option<&str>) -> Self {
        name.and_then(|n| Self::from_str(n.trim()).ok()).unwrap_or(Self::DEFAULT)
    }

    /// Returns `true` when a message at `message_level` passes a filter set to `self`.
    pub fn allows(self, message_level: Self) -> bool {
        message_level >= self
    }

    /// The closest `tracing` level for mirroring messages.
    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Fatal => tracing::Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        Self::from_level(level.as_tracing())
    }
}
