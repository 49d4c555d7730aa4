//! `Config` and the options it is built from.

use crate::format::Formatter;
use crate::level::Level;

use super::sink::Sink;

/// Immutable logger configuration.
///
/// Default: LTSV to stdout at Info and above.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    formatter: Formatter,
    out: Sink,
    min_level: Level,
}

impl Config {
    /// Apply `options` in order over the defaults. A later option for the
    /// same field overrides an earlier one.
    pub fn new(options: impl IntoIterator<Item = ConfigOption>) -> Self {
        options
            .into_iter()
            .fold(ConfigBuilder::default(), ConfigBuilder::option)
            .build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    pub fn out(&self) -> &Sink {
        &self.out
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }
}

/// A single field-level override applied by [`Config::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOption {
    Formatter(Formatter),
    Out(Sink),
    MinLevel(Level),
}

pub fn with_formatter(formatter: Formatter) -> ConfigOption {
    ConfigOption::Formatter(formatter)
}

pub fn with_out(out: impl Into<Sink>) -> ConfigOption {
    ConfigOption::Out(out.into())
}

pub fn with_min_level(min_level: Level) -> ConfigOption {
    ConfigOption::MinLevel(min_level)
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.config.formatter = formatter;
        self
    }

    pub fn out(mut self, out: impl Into<Sink>) -> Self {
        self.config.out = out.into();
        self
    }

    pub fn min_level(mut self, min_level: Level) -> Self {
        self.config.min_level = min_level;
        self
    }

    pub fn option(self, option: ConfigOption) -> Self {
        match option {
            ConfigOption::Formatter(formatter) => self.formatter(formatter),
            ConfigOption::Out(out) => self.out(out),
            ConfigOption::MinLevel(min_level) => self.min_level(min_level),
        }
    }

    pub fn build(self) -> Config {
        self.config
    }
}
