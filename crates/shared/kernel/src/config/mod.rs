use config::{Config, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub use config::Environment;

/// Base name of the settings file looked up when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "proctor";

/// Prefix for environment overrides (`PROCTOR__LOG_LEVEL`, `PROCTOR__FLAGS__HEADLESS`, ...).
pub const ENV_PREFIX: &str = "PROCTOR";

/// Errors raised while loading layered settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            let ConfigError::Config { context: c, .. } = &mut e;
            *c = Some(context.into());
            e
        })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// The `PROCTOR__` environment layer read from the process environment.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .convert_case(config::Case::Snake)
}

/// The `PROCTOR__` environment layer read from `vars` instead of the process environment.
///
/// Keys keep their full form (`PROCTOR__FLAGS__HEADLESS`); prefix and nesting rules are
/// the same as [`env_source`].
pub fn env_source_from<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Environment
where
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    env_source().source(Some(vars))
}

/// Loads settings from an optional file overlaid with environment variables.
///
/// Layers, lowest precedence first:
/// 1. **Base file**: `path`, or `proctor` in the working directory. The extension
///    selects the format; a missing file is not an error.
/// 2. **Environment**: variables prefixed with `PROCTOR__`, nested with `__`
///    (e.g., `PROCTOR__LOG_LEVEL` maps to `log_level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source is malformed or the merged values do
/// not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, env_source())
}

/// Same as [`load_config`], with an explicit environment layer.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env);

    info!(path = %effective_path.display(), "Loading settings");

    let config = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}
