//! LTSV rendering: `time:<ts>\tlevel:<lvl>\tmsg:<msg>\t<label>:<value>...`

use super::record::{field_label, Record, LEVEL_KEY, MSG_KEY, TIME_KEY};

/// Escape the characters that would break the tab/newline framing.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// `:` separates label from value, so a label may not contain one.
fn escape_label(label: &str) -> String {
    escape(label).replace(':', "_")
}

fn push_pair(line: &mut String, label: &str, value: &str) {
    if !line.is_empty() {
        line.push('\t');
    }
    line.push_str(&escape_label(label));
    line.push(':');
    line.push_str(&escape(value));
}

pub fn render(record: &Record<'_>) -> String {
    let mut line = String::with_capacity(128);
    push_pair(&mut line, TIME_KEY, &record.timestamp());
    push_pair(&mut line, LEVEL_KEY, record.level.as_str());
    push_pair(&mut line, MSG_KEY, record.message);
    for field in record.ordered_fields() {
        push_pair(&mut line, &field_label(field.key()), &field.value_text());
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::f;
    use crate::level::Level;

    #[test]
    fn test_ltsv_layout() {
        let fields = vec![
            f("request-id", "tx-1"),
            f("service-name", "svc"),
            f("id", 123),
            f("error", "err text"),
        ];
        let record = Record::new(Level::Debug, "debug message", &fields, 2);
        let line = render(&record);

        let (time, rest) = line.split_once('\t').unwrap();
        assert!(time.starts_with("time:"));
        assert_eq!(
            rest,
            "level:debug\tmsg:debug message\tid:123\terror:err text\trequest-id:tx-1\tservice-name:svc\n"
        );
    }

    #[test]
    fn test_ltsv_escapes_framing_chars() {
        let fields = vec![f("note", "a\tb\nc")];
        let record = Record::new(Level::Info, "multi\nline", &fields, 0);
        let line = render(&record);
        assert!(line.contains("msg:multi\\nline"));
        assert!(line.contains("note:a\\tb\\nc"));
        assert_eq!(line.matches('\t').count(), 3);
    }

    #[test]
    fn test_ltsv_label_colon_is_replaced() {
        let fields = vec![f("a:b", "c:d")];
        let record = Record::new(Level::Info, "colon", &fields, 0);
        let line = render(&record);
        assert!(line.ends_with("\ta_b:c:d\n"));

        let last = line.trim_end().rsplit('\t').next().unwrap();
        assert_eq!(last.split_once(':'), Some(("a_b", "c:d")));
    }

    #[test]
    fn test_ltsv_keeps_duplicate_keys() {
        let fields = vec![f("id", 1), f("id", 2)];
        let record = Record::new(Level::Info, "dup", &fields, 0);
        let line = render(&record);
        assert!(line.ends_with("\tid:1\tid:2\n"));
    }
}
