//! The unit handed to a formatter.

use chrono::{DateTime, Local, SecondsFormat};

use crate::field::Field;
use crate::level::Level;

/// Record keys written by every formatter ahead of the fields.
pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MSG_KEY: &str = "msg";

/// One log record ready to be rendered.
///
/// `fields` is the merged list: the first `required` entries are the
/// correlation fields, the rest are the caller's. Formatters write caller
/// fields first and the correlation fields last.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    pub message: &'a str,
    fields: &'a [Field],
    required: usize,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, fields: &'a [Field], required: usize) -> Self {
        Self {
            time: Local::now(),
            level,
            message,
            fields,
            required: required.min(fields.len()),
        }
    }

    /// Replace the timestamp.
    pub fn at(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    /// RFC3339 timestamp, `Z` when the local offset is zero.
    pub fn timestamp(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Fields in output order: caller fields, then correlation fields.
    pub fn ordered_fields(&self) -> impl Iterator<Item = &'a Field> {
        let (required, caller) = self.fields.split_at(self.required);
        caller.iter().chain(required.iter())
    }
}

/// Output label for a field key.
///
/// Keys that would shadow `time`, `level` or `msg` are prefixed with
/// `fields.`.
pub fn field_label(key: &str) -> String {
    match key {
        TIME_KEY | LEVEL_KEY | MSG_KEY => format!("fields.{}", key),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::f;
    use chrono::TimeZone;

    #[test]
    fn test_ordered_fields_puts_correlation_last() {
        let fields = vec![
            f("request-id", "tx-1"),
            f("service-name", "svc"),
            f("id", 1),
            f("user", "bob"),
        ];
        let record = Record::new(Level::Info, "hi", &fields, 2);
        let keys: Vec<&str> = record.ordered_fields().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["id", "user", "request-id", "service-name"]);
    }

    #[test]
    fn test_required_count_is_clamped() {
        let fields = vec![f("request-id", "tx-1")];
        let record = Record::new(Level::Info, "hi", &fields, 2);
        assert_eq!(record.ordered_fields().count(), 1);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let time = Local.with_ymd_and_hms(2020, 4, 8, 19, 42, 0).unwrap();
        let record = Record::new(Level::Info, "hi", &[], 0).at(time);
        let ts = record.timestamp();
        assert!(ts.starts_with("2020-04-08T19:42:00"));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_field_label_clash() {
        assert_eq!(field_label("msg"), "fields.msg");
        assert_eq!(field_label("time"), "fields.time");
        assert_eq!(field_label("id"), "id");
    }
}
