//! Route records from the `log` facade through the default logger.
//!
//! Dependencies that log via `log::info!` and friends end up in the same
//! sink and format as the service's own records.

use log::{Metadata, Record};

use crate::field::Field;
use crate::level::Level;

use super::global::default_logger;

/// Transaction ID given to bridged records, which carry none.
pub const BRIDGED_TRANSACTION_ID: &str = "-";

/// Field holding the `log` target of a bridged record.
pub const TARGET_KEY: &str = "target";

/// `log::Log` implementation backed by the current default logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        default_logger().enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        let logger = default_logger();
        let level = Level::from(record.level());
        if !logger.enabled(level) {
            return;
        }
        let msg = record.args().to_string();
        logger.emit(
            level,
            BRIDGED_TRANSACTION_ID,
            &msg,
            &[Field::new(TARGET_KEY, record.target())],
        );
    }

    fn flush(&self) {}
}

/// Install [`LogBridge`] as the `log` backend, passing records at `max`
/// and above. Fails if another backend is already installed.
pub fn install_log_bridge(max: Level) -> Result<(), log::SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max.into());
    Ok(())
}
