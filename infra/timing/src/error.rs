use std::borrow::Cow;

/// A specialized [`TimingError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    #[error("Timing already running{}: {name}", format_context(.context))]
    AlreadyRunning { name: String, context: Option<Cow<'static, str>> },

    #[error("Timing not started{}: {name}", format_context(.context))]
    NotStarted { name: String, context: Option<Cow<'static, str>> },
}

pub trait TimingErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, TimingError>;
}

impl<T> TimingErrorExt<T> for Result<T, TimingError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                TimingError::AlreadyRunning { context: c, .. }
                | TimingError::NotStarted { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
