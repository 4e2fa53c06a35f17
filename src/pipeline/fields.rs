//! Field derivation: compute the fixed display fields from a parsed record.
//!
//! This is the one stage with real decision logic — timestamp conversion,
//! column padding, the message fallback chain, and the residual-objects
//! block. Everything here is pure computation from a [`LogRecord`] to a
//! [`RenderFields`]; escaping and markup syntax stay out of this module.
//!
//! ## The objects block, and a deliberate duplication
//!
//! The residual fields (everything except the five header keys and
//! `message`) are pretty-printed as 4-space-indented JSON. `err` is *not*
//! removed from the residual set, so when a record carries an error with a
//! stack trace, the stack appears twice: once inside the JSON block and
//! once as the separately appended stack text. That duplication matches the
//! long-standing observable output of bole log viewers and is kept intact.

use crate::pipeline::parse::{self, LogRecord, REQUIRED_KEYS};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Rendered when the record's `time` value cannot be parsed as a date-time.
///
/// Same width as `HH:MM:SS`, so malformed timestamps do not break column
/// alignment.
pub const TIME_SENTINEL: &str = "??:??:??";

/// Display width of the pid column.
const PID_WIDTH: usize = 7;

/// Display width of the level column.
const LEVEL_WIDTH: usize = 5;

/// The fixed-shape display fields derived from one valid [`LogRecord`].
///
/// Values are staged here *before* HTML-escaping; the markup stage escapes
/// each field independently. `hostname` is derived like the rest but not
/// emitted in the line markup — it is available to alternative renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFields {
    /// Local time of day, `HH:MM:SS` (or [`TIME_SENTINEL`]).
    pub time: String,
    /// Hostname, passed through.
    pub hostname: String,
    /// Pid, right-justified to width 7.
    pub pid: String,
    /// Level, uppercased then left-justified to width 5.
    pub level: String,
    /// Logger name, passed through.
    pub name: String,
    /// Message, after the fallback chain.
    pub message: String,
    /// Residual-fields block: pretty JSON plus optional stack trace,
    /// newline-prefixed and indented; empty when there is nothing to show.
    pub objects: String,
}

impl RenderFields {
    /// Derive the display fields from a parsed record.
    ///
    /// `utc_offset_minutes` is the offset (east positive) used to shift the
    /// record's UTC timestamp into local time of day.
    pub fn derive(record: &LogRecord, utc_offset_minutes: i32) -> Self {
        Self {
            time: time_of_day(record.get("time").unwrap_or(&Value::Null), utc_offset_minutes),
            hostname: record.required_str("hostname"),
            pid: format!("{:>width$}", record.required_str("pid"), width = PID_WIDTH),
            level: format!(
                "{:<width$}",
                record.required_str("level").to_uppercase(),
                width = LEVEL_WIDTH
            ),
            name: record.required_str("name"),
            message: resolve_message(record),
            objects: objects_block(record),
        }
    }
}

/// The machine's current offset from UTC, in minutes east.
///
/// Read once per conversion run, and applied to every record regardless of
/// the offset in effect when the record was logged — the behaviour log
/// viewers in this format family have always had.
pub fn local_offset_minutes() -> i32 {
    Local::now().offset().local_minus_utc() / 60
}

// ── Time ─────────────────────────────────────────────────────────────────

/// Convert the record's `time` value to a local `HH:MM:SS` string.
///
/// Accepts an RFC 3339 or RFC 2822 string, or a number of epoch
/// milliseconds. Anything else degrades to [`TIME_SENTINEL`] — the
/// converter's never-fails contract forbids propagating a parse error for
/// one bad timestamp.
fn time_of_day(value: &Value, utc_offset_minutes: i32) -> String {
    parse_timestamp(value)
        .and_then(|utc| utc.checked_add_signed(Duration::minutes(utc_offset_minutes.into())))
        .map(|shifted| shifted.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| TIME_SENTINEL.to_string())
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_rfc2822(s))
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        _ => None,
    }
}

// ── Message fallback ─────────────────────────────────────────────────────

/// Resolve the message field.
///
/// A present message passes through untouched. An absent (or `null`) one
/// falls back to `error: <err.name>` when the record carries an `err`
/// (`unknown` when `err.name` is itself missing or falsy), and to the
/// empty string otherwise.
fn resolve_message(record: &LogRecord) -> String {
    match record.get("message") {
        Some(Value::Null) | None => match record.get("err") {
            Some(err) if !err.is_null() => {
                let name = record
                    .err()
                    .and_then(|e| e.get("name"))
                    .filter(|v| parse::is_present(Some(*v)))
                    .map(parse::scalar_to_string)
                    .unwrap_or_else(|| "unknown".to_string());
                format!("error: {name}")
            }
            _ => String::new(),
        },
        Some(value) => parse::scalar_to_string(value),
    }
}

// ── Objects block ────────────────────────────────────────────────────────

/// Build the residual-fields block: pretty JSON of every non-header field,
/// plus the `err.stack` text when one exists.
fn objects_block(record: &LogRecord) -> String {
    let residual: Map<String, Value> = record
        .iter()
        .filter(|(key, _)| !is_header_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let json = pretty_json(&Value::Object(residual));
    let mut block = if json == "{}" {
        String::new()
    } else {
        format!("\n{}", indent(&json))
    };

    if let Some(stack) = stack_text(record) {
        block.push('\n');
        block.push_str(&indent(&stack));
    }

    block
}

fn is_header_key(key: &str) -> bool {
    key == "message" || REQUIRED_KEYS.contains(&key)
}

/// The stack trace carried by `err`, if any.
fn stack_text(record: &LogRecord) -> Option<String> {
    record
        .err()?
        .get("stack")
        .filter(|v| !v.is_null())
        .map(parse::scalar_to_string)
}

/// Pretty-print with 4-space indentation (serde_json defaults to 2).
fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    // Serialising a Value into a Vec cannot fail: no I/O, keys are strings.
    if value.serialize(&mut ser).is_err() {
        return "{}".to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| "{}".to_string())
}

/// Prefix every line with four spaces, preserving internal indentation.
fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> LogRecord {
        LogRecord::parse(line).expect("test record should parse")
    }

    fn minimal() -> LogRecord {
        record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":42,"level":"info","name":"app"}"#)
    }

    // ── Time ─────────────────────────────────────────────────────────────

    #[test]
    fn time_of_day_at_utc() {
        let f = RenderFields::derive(&minimal(), 0);
        assert_eq!(f.time, "13:46:41");
    }

    #[test]
    fn time_of_day_applies_offset() {
        // UTC-5 (New York winter): 13:46 UTC is 08:46 local.
        let f = RenderFields::derive(&minimal(), -300);
        assert_eq!(f.time, "08:46:41");
        // UTC+5:30 (India): 13:46 UTC is 19:16 local.
        let f = RenderFields::derive(&minimal(), 330);
        assert_eq!(f.time, "19:16:41");
    }

    #[test]
    fn time_offset_can_cross_midnight() {
        let r = record(r#"{"time":"2016-02-04T23:30:00.000Z","hostname":"h","pid":1,"level":"info","name":"n"}"#);
        let f = RenderFields::derive(&r, 60);
        assert_eq!(f.time, "00:30:00");
    }

    #[test]
    fn epoch_millis_timestamp() {
        // 1454593601312 ms = 2016-02-04T13:46:41.312Z
        let r = record(r#"{"time":1454593601312,"hostname":"h","pid":1,"level":"info","name":"n"}"#);
        let f = RenderFields::derive(&r, 0);
        assert_eq!(f.time, "13:46:41");
    }

    #[test]
    fn malformed_time_renders_sentinel() {
        let r = record(r#"{"time":"last tuesday","hostname":"h","pid":1,"level":"info","name":"n"}"#);
        let f = RenderFields::derive(&r, 0);
        assert_eq!(f.time, TIME_SENTINEL);
        assert_eq!(f.time.len(), "HH:MM:SS".len());
    }

    // ── Padding ──────────────────────────────────────────────────────────

    #[test]
    fn pid_is_right_justified_to_seven() {
        let f = RenderFields::derive(&minimal(), 0);
        assert_eq!(f.pid, "     42");
    }

    #[test]
    fn wide_pid_is_not_truncated() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":123456789,"level":"info","name":"n"}"#);
        let f = RenderFields::derive(&r, 0);
        assert_eq!(f.pid, "123456789");
    }

    #[test]
    fn level_is_uppercased_and_left_justified_to_five() {
        let f = RenderFields::derive(&minimal(), 0);
        assert_eq!(f.level, "INFO ");

        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n"}"#);
        assert_eq!(RenderFields::derive(&r, 0).level, "ERROR");

        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"warn","name":"n"}"#);
        assert_eq!(RenderFields::derive(&r, 0).level, "WARN ");
    }

    // ── Message fallback ─────────────────────────────────────────────────

    #[test]
    fn present_message_passes_through() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"info","name":"n","message":"the message string"}"#);
        assert_eq!(RenderFields::derive(&r, 0).message, "the message string");
    }

    #[test]
    fn missing_message_with_err_uses_err_name() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","err":{"name":"TypeError"}}"#);
        assert_eq!(RenderFields::derive(&r, 0).message, "error: TypeError");
    }

    #[test]
    fn missing_message_with_nameless_err_uses_unknown() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","err":{"message":"boom"}}"#);
        assert_eq!(RenderFields::derive(&r, 0).message, "error: unknown");
        // An empty name is as good as no name.
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","err":{"name":""}}"#);
        assert_eq!(RenderFields::derive(&r, 0).message, "error: unknown");
    }

    #[test]
    fn missing_message_without_err_is_empty() {
        assert_eq!(RenderFields::derive(&minimal(), 0).message, "");
    }

    #[test]
    fn null_message_takes_the_fallback_path() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","message":null,"err":{"name":"Boom"}}"#);
        assert_eq!(RenderFields::derive(&r, 0).message, "error: Boom");
    }

    // ── Objects block ────────────────────────────────────────────────────

    #[test]
    fn bare_record_has_empty_objects_block() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"info","name":"n","message":"m"}"#);
        assert_eq!(RenderFields::derive(&r, 0).objects, "");
    }

    #[test]
    fn user_fields_are_pretty_printed_and_indented() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"info","name":"n","userObject":{"userProp1":"blah"}}"#);
        let objects = RenderFields::derive(&r, 0).objects;
        assert!(objects.starts_with("\n    {"));
        assert!(objects.contains("\n        \"userObject\": {"));
        assert!(objects.contains("\"userProp1\": \"blah\""));
        assert!(objects.ends_with("    }"));
    }

    #[test]
    fn user_fields_keep_input_order() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"info","name":"n","zebra":1,"apple":2}"#);
        let objects = RenderFields::derive(&r, 0).objects;
        let zebra = objects.find("zebra").unwrap();
        let apple = objects.find("apple").unwrap();
        assert!(zebra < apple, "keys must stay in input order: {objects}");
    }

    #[test]
    fn stack_appears_in_json_and_stack_block() {
        let r = record(
            r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","err":{"name":"TypeError","stack":"TypeError: boom\n    at main (app.js:37:11)"}}"#,
        );
        let objects = RenderFields::derive(&r, 0).objects;
        // Once inside the pretty JSON (escaped newline)…
        assert!(objects.contains("\"stack\": \"TypeError: boom\\n    at main (app.js:37:11)\""));
        // …and once as the appended stack text, every line indented by 4.
        assert!(objects.contains("\n    TypeError: boom\n        at main (app.js:37:11)"));
    }

    #[test]
    fn err_without_stack_appends_nothing_extra() {
        let r = record(r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":1,"level":"error","name":"n","err":{"name":"Boom"}}"#);
        let objects = RenderFields::derive(&r, 0).objects;
        assert!(objects.contains("\"err\""));
        assert!(objects.ends_with('}') || objects.ends_with("    }"));
    }

    #[test]
    fn hostname_is_staged_but_present() {
        let f = RenderFields::derive(&minimal(), 0);
        assert_eq!(f.hostname, "h");
    }
}
