//! Textual logger settings from a config file or the environment.

use serde::Deserialize;

use crate::format::Formatter;
use crate::level::parse_level;

use super::options::Config;
use super::sink::Sink;
use super::ConfigError;

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_OUT: &str = "LOG_OUT";

/// Logger settings as they appear in a service's configuration.
///
/// Missing keys take the defaults: `info`, `ltsv`, `stdout`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: String,
    pub out: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "ltsv".to_string(),
            out: "stdout".to_string(),
        }
    }
}

impl LogSettings {
    /// Read `LOG_LEVEL`, `LOG_FORMAT` and `LOG_OUT`, defaulting unset ones.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.level),
            format: lookup(ENV_LOG_FORMAT).unwrap_or(defaults.format),
            out: lookup(ENV_LOG_OUT).unwrap_or(defaults.out),
        }
    }

    /// Validate every setting and build the config.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let min_level = parse_level(&self.level)?;
        let formatter: Formatter = self.format.parse()?;
        let out: Sink = self.out.parse()?;

        log::debug!(
            "LOG_SETTINGS_RESOLVED level={} format={} out={}",
            min_level,
            formatter,
            self.out
        );

        Ok(Config::builder()
            .formatter(formatter)
            .out(out)
            .min_level(min_level)
            .build())
    }
}

impl TryFrom<LogSettings> for Config {
    type Error = ConfigError;

    fn try_from(settings: LogSettings) -> Result<Self, Self::Error> {
        settings.into_config()
    }
}
