//! Severity levels.
//!
//! Totally ordered: Debug < Info < Warn < Error < Panic. Used both to tag
//! each record and to filter emission against a configured minimum.

pub mod severity;

pub use severity::*;
