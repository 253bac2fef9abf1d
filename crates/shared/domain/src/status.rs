use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Outcome classification of an automation run.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The run completed normally. Every run starts here.
    #[default]
    Success,
    /// The run failed an assertion.
    Failure,
    /// The run hit an unexpected error.
    Error,
}

impl Status {
    /// Applies a requested status change under the "first non-success transition wins" rule.
    ///
    /// Only `Success` may move, and only to the requested state. Once a run is
    /// `Failure` or `Error` it stays there: neither can overwrite the other, and
    /// requesting `Success` never resets a terminal state.
    #[must_use]
    pub const fn transition(self, requested: Self) -> Self {
        match self {
            Self::Success => requested,
            Self::Failure | Self::Error => self,
        }
    }

    /// `Failure` and `Error` are terminal with respect to each other.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Success)
    }
}
