//! Leveled logger bound to one `Config`.

use std::fmt::Display;

use crate::config::Config;
use crate::field::Field;
use crate::format::Record;
use crate::level::Level;

use super::correlation::{service_name, REQUEST_ID_KEY, SERVICE_NAME_KEY};

/// Number of correlation fields at the front of a merged field list.
pub const REQUIRED_FIELD_COUNT: usize = 2;

/// Correlation fields followed by the caller's fields, in call order.
/// Duplicates are kept.
pub fn merge_fields(tx_id: impl Display, fields: &[Field]) -> Vec<Field> {
    let mut merged = Vec::with_capacity(REQUIRED_FIELD_COUNT + fields.len());
    merged.push(Field::new(REQUEST_ID_KEY, tx_id.to_string()));
    merged.push(Field::new(SERVICE_NAME_KEY, service_name()));
    merged.extend_from_slice(fields);
    merged
}

/// Structured logger.
///
/// Services normally use the free functions backed by the default logger;
/// build one directly for tests or tooling that needs its own sink.
/// Logging never returns an error: sink failures are dropped.
#[derive(Debug, Clone)]
pub struct Logger {
    config: Config,
}

impl Logger {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.config.min_level() <= level
    }

    pub fn debug(&self, tx_id: impl Display, msg: &str, fields: &[Field]) {
        self.emit(Level::Debug, tx_id, msg, fields);
    }

    pub fn info(&self, tx_id: impl Display, msg: &str, fields: &[Field]) {
        self.emit(Level::Info, tx_id, msg, fields);
    }

    pub fn warn(&self, tx_id: impl Display, msg: &str, fields: &[Field]) {
        self.emit(Level::Warn, tx_id, msg, fields);
    }

    pub fn error(&self, tx_id: impl Display, msg: &str, fields: &[Field]) {
        self.emit(Level::Error, tx_id, msg, fields);
    }

    /// Write the record, then panic with `msg`.
    pub fn panic(&self, tx_id: impl Display, msg: &str, fields: &[Field]) -> ! {
        self.emit(Level::Panic, tx_id, msg, fields);
        panic!("{}", msg)
    }

    pub(crate) fn emit(&self, level: Level, tx_id: impl Display, msg: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        let merged = merge_fields(tx_id, fields);
        let record = Record::new(level, msg, &merged, REQUIRED_FIELD_COUNT);
        let line = self.config.formatter().render(&record);
        let _ = self.config.out().write_record(line.as_bytes());
    }
}
