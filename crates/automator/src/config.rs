use proctor_domain::{Flags, LogLevel, RunId};
use proctor_kernel::new_run_id;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Configuration for one automation.
///
/// Built once through [`Config::builder`] and read-only afterwards. Construction never
/// fails: every missing or unrecognized input resolves to a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    id: RunId,
    log_level: LogLevel,
    flags: Flags,
}

impl Config {
    #[must_use = "The builder must be built to produce a Config."]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub const fn id(&self) -> &RunId {
        &self.id
    }

    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub const fn flags(&self) -> &Flags {
        &self.flags
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone)]
enum LevelSource {
    Level(LogLevel),
    Named(String),
}

#[derive(Debug, Clone)]
enum FlagsSource {
    Instance(Flags),
    Map(Vec<(String, Value)>),
}

/// Collects optional [`Config`] inputs; [`ConfigBuilder::build`] resolves them.
///
/// Each field resolves as: explicit value, then membership check, then fallback.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    id: Option<RunId>,
    log_level: Option<LevelSource>,
    flags: Option<FlagsSource>,
}

impl ConfigBuilder {
    /// Identifier used to track the automation. A random UUID is generated when omitted.
    #[must_use]
    pub fn id(mut self, id: impl Into<RunId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(LevelSource::Level(level));
        self
    }

    /// Level given by name, as it arrives from settings files or the environment.
    /// Names that are not recognized resolve to [`LogLevel::DEFAULT`].
    #[must_use]
    pub fn log_level_named(mut self, name: impl Into<String>) -> Self {
        self.log_level = Some(LevelSource::Named(name.into()));
        self
    }

    /// Uses an existing flag set as-is; the config shares the caller's instance.
    #[must_use]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = Some(FlagsSource::Instance(flags));
        self
    }

    /// Builds a new flag set from name/value pairs.
    #[must_use]
    pub fn flag_map<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let pairs = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.flags = Some(FlagsSource::Map(pairs));
        self
    }

    pub fn build(self) -> Config {
        let id = self.id.unwrap_or_else(new_run_id);

        let log_level = match self.log_level {
            Some(LevelSource::Level(level)) => level,
            Some(LevelSource::Named(name)) => {
                let level = LogLevel::coerce(Some(name.as_str()));
                if !level.to_string().eq_ignore_ascii_case(name.trim()) {
                    debug!(requested = %name, using = %level, "Unrecognized log level");
                }
                level
            }
            None => LogLevel::DEFAULT,
        };

        let flags = match self.flags {
            Some(FlagsSource::Instance(flags)) => flags,
            Some(FlagsSource::Map(pairs)) => Flags::from_map(pairs),
            None => Flags::new(),
        };

        Config { id, log_level, flags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_uses_defaults() {
        let config = Config::builder().build();
        assert_eq!(config.log_level(), LogLevel::Error);
        assert!(config.flags().is_empty());
        assert!(!config.id().as_str().is_empty());
    }

    #[test]
    fn later_setter_wins() {
        let config = Config::builder()
            .log_level(LogLevel::Debug)
            .log_level_named("warning")
            .flag_map([("a", 1)])
            .flags(Flags::from_map([("b", 2)]))
            .build();
        assert_eq!(config.log_level(), LogLevel::Warning);
        assert!(config.flags().contains("b"));
        assert!(!config.flags().contains("a"));
    }
}
