//! Record rendering.
//!
//! A closed set of formatters selected through [`Formatter`]:
//! - `Text` - `key=value` pairs, quoted where needed
//! - `Json` - one JSON object per line
//! - `Ltsv` - tab-separated `label:value` pairs

pub mod formatter;
pub mod json;
pub mod ltsv;
pub mod record;
pub mod text;

pub use formatter::*;
pub use record::*;
