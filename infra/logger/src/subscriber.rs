use crate::error::{LoggerError, LoggerErrorExt};
use crate::logger::RUN_TARGET;
use private::Sealed;
use proctor_domain::LogLevel;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct SubscriberConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LogLevel,
    run_level: Option<LogLevel>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LogLevel::Info,
            run_level: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Installs the process-wide `tracing` subscriber.
///
/// Run loggers mirror their messages into `tracing`; this is what makes them visible
/// on the console or in rolling log files.
#[derive(Debug)]
pub struct Subscriber;

impl Subscriber {
    /// Returns a builder. A name is required before [`SubscriberBuilder::init`]
    /// becomes available; it also prefixes rolling log files (`<name>.<date>.log`).
    #[must_use = "The builder must be configured before it can install the subscriber."]
    pub fn builder() -> SubscriberBuilder {
        SubscriberBuilder { config: SubscriberConfig::default(), name: NoName, file: PhantomData }
    }
}

/// Typestate builder for [`Subscriber`].
#[derive(Debug)]
pub struct SubscriberBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: SubscriberConfig,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> SubscriberBuilder<NoName, F> {
    pub fn name(self, name: impl Into<String>) -> SubscriberBuilder<WithName, F> {
        SubscriberBuilder { config: self.config, name: WithName(name.into()), file: PhantomData }
    }
}

impl SubscriberBuilder<WithName, WithFile> {
    /// Number of rotated files to keep.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes file output as JSON lines.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> SubscriberBuilder<WithName, F> {
    /// Minimum level emitted when `RUST_LOG` and [`Self::env_filter`] say nothing else.
    #[must_use]
    pub const fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Level for events mirrored from run loggers (target [`RUN_TARGET`]), independent
    /// of [`Self::level`].
    #[must_use]
    pub const fn run_level(mut self, level: LogLevel) -> Self {
        self.config.run_level = Some(level);
        self
    }

    /// Adds explicit filter directives (e.g., `proctor=debug,hyper=info`).
    ///
    /// Invalid directives make [`Self::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables rolling file output under `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> SubscriberBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        SubscriberBuilder { config, name: self.name, file: PhantomData }
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`SubscriberGuard`] alive until shutdown so buffered file
    /// output is flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    /// bad filter directives, or when no output is enabled.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<SubscriberGuard, LoggerError> {
        let name = self.name.0;
        validate(&self.config, &name)?;

        let filter = build_env_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.config.path {
            Some(path) => {
                fs::create_dir_all(&path)
                    .context(format!("Failed to create log directory: {}", path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(&path)
                    .context(format!("Failed to open log files in {}", path.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.config.json {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Enable console or file logging.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name = %name, "Tracing subscriber installed");

        Ok(SubscriberGuard { name, guard })
    }
}

/// Handle returned by [`SubscriberBuilder::init`].
///
/// Dropping it stops the background file writer, flushing pending lines.
#[must_use = "Dropping this handle stops background log writing."]
#[derive(Debug)]
pub struct SubscriberGuard {
    name: String,
    guard: Option<WorkerGuard>,
}

impl SubscriberGuard {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether file output is active.
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for SubscriberGuard {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(name = %self.name, "Flushing log files before shutdown");
        }
    }
}

fn validate(config: &SubscriberConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Subscriber name cannot be empty".into(),
            context: None,
        });
    }
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn build_env_filter(config: &SubscriberConfig) -> Result<EnvFilter, LoggerError> {
    let builder =
        EnvFilter::builder().with_default_directive(LevelFilter::from(config.level).into());
    let filter = match &config.env_filter {
        None => builder.from_env_lossy(),
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            })?
        }
    };

    let Some(run_level) = config.run_level else {
        return Ok(filter);
    };
    let directive = run_directive(run_level);
    let directive = directive.parse().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid filter '{directive}': {e}").into(),
        context: None,
    })?;
    Ok(filter.add_directive(directive))
}

fn run_directive(level: LogLevel) -> String {
    format!("{RUN_TARGET}={}", LevelFilter::from(level))
}
