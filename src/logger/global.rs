//! Process-wide default logger and the free functions that use it.

use std::fmt::Display;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::config::Config;
use crate::field::Field;

use super::facade::Logger;

// Default: LTSV to stdout at Info and above.
lazy_static! {
    static ref DEFAULT_LOGGER: RwLock<Arc<Logger>> =
        RwLock::new(Arc::new(Logger::new(Config::default())));
}

/// The logger the free functions currently use.
///
/// The lock is released before returning, so the caller logs without
/// blocking a concurrent [`alter_default_logger`].
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&DEFAULT_LOGGER.read())
}

/// Replace the default logger with one built from `config`.
///
/// The new logger is fully built before the swap. Calls already holding
/// the previous logger finish on it.
pub fn alter_default_logger(config: Config) {
    let logger = Arc::new(Logger::new(config));
    let (formatter, min_level) = (logger.config().formatter(), logger.config().min_level());
    *DEFAULT_LOGGER.write() = logger;

    log::debug!(
        "DEFAULT_LOGGER_ALTERED formatter={} min_level={}",
        formatter,
        min_level
    );
}

/// Log at Debug through the default logger.
pub fn debug(tx_id: impl Display, msg: &str, fields: &[Field]) {
    default_logger().debug(tx_id, msg, fields);
}

/// Log at Info through the default logger.
pub fn info(tx_id: impl Display, msg: &str, fields: &[Field]) {
    default_logger().info(tx_id, msg, fields);
}

/// Log at Warn through the default logger.
pub fn warn(tx_id: impl Display, msg: &str, fields: &[Field]) {
    default_logger().warn(tx_id, msg, fields);
}

/// Log at Error through the default logger.
pub fn error(tx_id: impl Display, msg: &str, fields: &[Field]) {
    default_logger().error(tx_id, msg, fields);
}

/// Log at Panic through the default logger, then panic.
pub fn panic(tx_id: impl Display, msg: &str, fields: &[Field]) -> ! {
    default_logger().panic(tx_id, msg, fields)
}
