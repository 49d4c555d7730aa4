//! JSON rendering: one object per line.
//!
//! Keys keep insertion order: `time`, `level`, `msg`, then the fields in
//! output order. A repeated key keeps its first position and last value.

use serde_json::{Map, Value};

use super::record::{field_label, Record, LEVEL_KEY, MSG_KEY, TIME_KEY};

pub fn render(record: &Record<'_>) -> String {
    let mut object = Map::new();
    object.insert(TIME_KEY.to_string(), Value::String(record.timestamp()));
    object.insert(
        LEVEL_KEY.to_string(),
        Value::String(record.level.as_str().to_string()),
    );
    object.insert(MSG_KEY.to_string(), Value::String(record.message.to_string()));
    for field in record.ordered_fields() {
        object.insert(field_label(field.key()), field.value().clone());
    }

    let mut line = Value::Object(object).to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::f;
    use crate::level::Level;

    #[test]
    fn test_json_object() {
        let fields = vec![
            f("request-id", "tx-1"),
            f("service-name", "svc"),
            f("id", 123),
        ];
        let record = Record::new(Level::Error, "boom", &fields, 2);
        let line = render(&record);
        let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();

        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["msg"], "boom");
        assert_eq!(parsed["id"], 123);
        assert_eq!(parsed["request-id"], "tx-1");
        assert_eq!(parsed["service-name"], "svc");
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_json_clashing_and_duplicate_keys() {
        let fields = vec![f("msg", "shadow"), f("id", 1), f("id", 2)];
        let record = Record::new(Level::Info, "real", &fields, 0);
        let parsed: Value = serde_json::from_str(render(&record).trim_end()).unwrap();

        assert_eq!(parsed["msg"], "real");
        assert_eq!(parsed["fields.msg"], "shadow");
        assert_eq!(parsed["id"], 2);
    }

    #[test]
    fn test_json_key_order() {
        let fields = vec![
            f("request-id", "tx-1"),
            f("service-name", "svc"),
            f("zeta", 1),
            f("alpha", 2),
        ];
        let record = Record::new(Level::Info, "hello", &fields, 2);
        let parsed: Value = serde_json::from_str(render(&record).trim_end()).unwrap();

        let keys: Vec<&str> = parsed.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["time", "level", "msg", "zeta", "alpha", "request-id", "service-name"]
        );
    }
}
