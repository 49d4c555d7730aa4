//! Formatter selection.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

use super::record::Record;
use super::{json, ltsv, text};

/// Wire format of rendered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Formatter {
    Text,
    Json,
    #[default]
    Ltsv,
}

impl Formatter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formatter::Text => "text",
            Formatter::Json => "json",
            Formatter::Ltsv => "ltsv",
        }
    }

    /// Render one record, newline included.
    pub fn render(&self, record: &Record<'_>) -> String {
        match self {
            Formatter::Text => text::render(record),
            Formatter::Json => json::render(record),
            Formatter::Ltsv => ltsv::render(record),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formatter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Formatter::Text),
            "json" => Ok(Formatter::Json),
            "ltsv" => Ok(Formatter::Ltsv),
            _ => Err(ConfigError::UnknownFormatter(s.to_string())),
        }
    }
}
