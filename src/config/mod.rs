//! Logger configuration.
//!
//! A [`Config`] is immutable once built. It is assembled from ordered
//! options over the defaults (LTSV, stdout, Info), or from
//! [`LogSettings`] read from a settings file or the environment.

pub mod options;
pub mod settings;
pub mod sink;

use thiserror::Error;

use crate::level::ParseLevelError;

pub use options::*;
pub use settings::*;
pub use sink::*;

/// Errors from turning textual settings into a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),

    #[error("unknown formatter: {0}")]
    UnknownFormatter(String),

    #[error("unknown output sink: {0}")]
    UnknownSink(String),
}
