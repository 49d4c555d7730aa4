//! The logging facade.
//!
//! [`Logger`] filters by level, merges the correlation fields
//! (`request-id`, `service-name`) with the caller's fields and writes one
//! rendered record to the configured sink. The free functions in
//! [`global`] go through a process-wide default logger.

pub mod bridge;
pub mod correlation;
pub mod facade;
pub mod global;

pub use bridge::*;
pub use correlation::*;
pub use facade::*;
pub use global::*;
