//! Log level definition and parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const STR_DEBUG: &str = "debug";
const STR_INFO: &str = "info";
const STR_WARN: &str = "warn";
const STR_ERROR: &str = "error";
const STR_PANIC: &str = "panic";
const STR_UNKNOWN: &str = "unknown";

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Level {
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Panic = 5,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => STR_DEBUG,
            Level::Info => STR_INFO,
            Level::Warn => STR_WARN,
            Level::Error => STR_ERROR,
            Level::Panic => STR_PANIC,
        }
    }

    /// Name of a raw level value. Values outside the defined range
    /// name as "unknown".
    pub fn name_of(raw: i8) -> &'static str {
        Level::try_from(raw).map(|l| l.as_str()).unwrap_or(STR_UNKNOWN)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level as i8
    }
}

impl TryFrom<i8> for Level {
    type Error = ParseLevelError;

    fn try_from(raw: i8) -> Result<Self, ParseLevelError> {
        Level::ALL
            .into_iter()
            .find(|l| *l as i8 == raw)
            .ok_or_else(|| ParseLevelError(raw.to_string()))
    }
}

/// Returned when a level name is not one of the five defined levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

/// Parse a level name, case-insensitively.
///
/// Meant for startup-time configuration. Callers decide whether an
/// invalid name is fatal.
pub fn parse_level(name: &str) -> Result<Level, ParseLevelError> {
    match name.to_ascii_lowercase().as_str() {
        STR_DEBUG => Ok(Level::Debug),
        STR_INFO => Ok(Level::Info),
        STR_WARN => Ok(Level::Warn),
        STR_ERROR => Ok(Level::Error),
        STR_PANIC => Ok(Level::Panic),
        _ => Err(ParseLevelError(name.to_string())),
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

impl From<log::Level> for Level {
    /// `log` has no panic level; trace folds into debug.
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::LevelFilter::Trace,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error | Level::Panic => log::LevelFilter::Error,
        }
    }
}
