//! Structured log attributes.

pub mod attribute;

pub use attribute::*;
