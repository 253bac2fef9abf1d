use proctor_kernel::config::ConfigError;
use proctor_timing::TimingError;
use std::borrow::Cow;

/// A specialized [`AutomatorError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum AutomatorError {
    /// A caller broke an operation's precondition (e.g., recorded data without a key).
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Timing error{}: {source}", format_context(.context))]
    Timing { source: TimingError, context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Settings { source: ConfigError, context: Option<Cow<'static, str>> },
}

pub type Result<T, E = AutomatorError> = std::result::Result<T, E>;

/// Adds `.context(..)` to results that can become an [`AutomatorError`].
pub trait AutomatorErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> AutomatorErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                AutomatorError::InvalidArgument { context: c, .. }
                | AutomatorError::Timing { context: c, .. }
                | AutomatorError::Settings { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> AutomatorErrorExt<T> for Result<T, TimingError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| AutomatorError::Timing { source, context: Some(context.into()) })
    }
}

impl<T> AutomatorErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| AutomatorError::Settings { source, context: Some(context.into()) })
    }
}

impl From<TimingError> for AutomatorError {
    fn from(source: TimingError) -> Self {
        Self::Timing { source, context: None }
    }
}

impl From<ConfigError> for AutomatorError {
    fn from(source: ConfigError) -> Self {
        Self::Settings { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
