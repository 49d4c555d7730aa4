//! Text rendering: `time="<ts>" level=<lvl> msg=<msg> key=value ...`

use lazy_static::lazy_static;
use regex::Regex;

use super::record::{field_label, Record, LEVEL_KEY, MSG_KEY, TIME_KEY};

lazy_static! {
    /// Keys and values made only of these characters are written bare.
    static ref BARE_TOKEN: Regex = Regex::new(r"^[A-Za-z0-9\-._/@^+]+$").unwrap();
}

fn quote_if_needed(token: &str) -> String {
    if BARE_TOKEN.is_match(token) {
        token.to_string()
    } else {
        serde_json::Value::String(token.to_string()).to_string()
    }
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(&quote_if_needed(key));
    line.push('=');
    line.push_str(&quote_if_needed(value));
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
