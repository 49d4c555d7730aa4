//! svclog - leveled structured logging for microservices
//!
//! Every record carries the caller's transaction ID (`request-id`) and the
//! service name (`service-name`) next to the caller's own fields, and is
//! rendered as LTSV, JSON or text.
//!
//! ```no_run
//! use svclog::{f, Config, Formatter, Level};
//!
//! svclog::alter_default_logger(Config::new([
//!     svclog::with_formatter(Formatter::Json),
//!     svclog::with_min_level(Level::Debug),
//! ]));
//! svclog::info("tx-1", "order accepted", &[f("order_id", 123)]);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `level` - Ordered severities and level parsing
//! - `field` - Key/value attributes
//! - `format` - Record shape and the text/JSON/LTSV renderers
//! - `config` - Immutable config, sinks, settings from file or environment
//! - `logger` - The facade, the process-wide default and the `log` bridge

pub mod config;
pub mod field;
pub mod format;
pub mod level;
pub mod logger;

pub use config::{
    with_formatter, with_min_level, with_out, BufferSink, Config, ConfigBuilder, ConfigError,
    ConfigOption, LogSettings, Sink,
};
pub use field::{e, f, Field, ERROR_KEY};
pub use format::Formatter;
pub use level::{parse_level, Level, ParseLevelError};
pub use logger::{
    alter_default_logger, debug, default_logger, error, info, install_log_bridge, merge_fields,
    new_transaction_id, panic, service_name, warn, LogBridge, Logger, REQUEST_ID_KEY,
    SERVICE_NAME_KEY, SERVICE_NAME_NOT_SET, X_TRANSACTION_ID,
};
