use crate::config::Config;
use crate::error::{AutomatorErrorExt, Result};
use proctor_kernel::config::{Environment, env_source, load_config_with_env};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw automator settings as they appear in a settings file or the environment.
///
/// ```toml
/// id = "nightly-checkout"
/// log_level = "info"
///
/// [flags]
/// headless = true
/// ```
///
/// Values are resolved with the same rules as [`Config::builder`], so an unknown
/// `log_level` still yields a usable config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutomatorSettings {
    pub id: Option<String>,
    pub log_level: Option<String>,
    pub flags: BTreeMap<String, Value>,
}

impl AutomatorSettings {
    /// Loads settings from `path` (or `proctor.*` in the working directory) overlaid
    /// with `PROCTOR__*` environment variables.
    ///
    /// # Errors
    /// Returns [`crate::AutomatorError::Settings`] when a source is malformed.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self> {
        Self::load_with_env(path, env_source())
    }

    /// Like [`Self::load`], reading overrides from `env` rather than the process environment.
    ///
    /// # Errors
    /// Returns [`crate::AutomatorError::Settings`] when a source is malformed.
    pub fn load_with_env(path: Option<impl AsRef<Path>>, env: Environment) -> Result<Self> {
        load_config_with_env::<Self>(path, env).context("Failed to load automator settings")
    }
}

impl From<AutomatorSettings> for Config {
    fn from(settings: AutomatorSettings) -> Self {
        let mut builder = Self::builder().flag_map(settings.flags);
        if let Some(id) = settings.id {
            builder = builder.id(id);
        }
        if let Some(level) = settings.log_level {
            builder = builder.log_level_named(level);
        }
        builder.build()
    }
}
