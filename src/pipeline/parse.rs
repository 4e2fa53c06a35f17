//! Record parsing: decide whether a line is a structured log record.
//!
//! ## Why "falsy", not just "present"?
//!
//! bole always writes all five header fields, so a record with
//! `"hostname": ""` or `"pid": 0` did not come from a healthy logger — it
//! is more useful rendered verbatim than dressed up as a log line with
//! blank columns. The presence check therefore mirrors JavaScript
//! truthiness: absent, `null`, `""`, `0` and `false` all disqualify the
//! line, while any other value (including arrays and objects) counts as
//! present. Type errors in the header fields (say, an object where the
//! level belongs) also fall back to plain text rather than panicking.

use serde_json::{Map, Value};

/// The five keys every structured record must carry.
pub const REQUIRED_KEYS: [&str; 5] = ["time", "hostname", "pid", "level", "name"];

/// One successfully parsed log record.
///
/// A thin wrapper over the decoded JSON object; constructed per line and
/// dropped as soon as the line's markup has been produced.
#[derive(Debug, Clone)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    /// Attempt to parse a line as a structured log record.
    ///
    /// Returns `None` when the line is not JSON, not a JSON object, or any
    /// required key is missing or falsy — the caller renders such lines
    /// through the plain-text fallback.
    pub fn parse(line: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(line).ok()?;
        let Value::Object(fields) = value else {
            return None;
        };

        for key in REQUIRED_KEYS {
            if !is_present(fields.get(key)) {
                return None;
            }
        }

        // The header fields flow into text columns; a record whose level or
        // name is an object cannot be rendered as one.
        for key in ["hostname", "level", "name"] {
            if !is_scalar(&fields[key]) {
                return None;
            }
        }
        if !matches!(&fields["pid"], Value::Number(_) | Value::String(_)) {
            return None;
        }

        Some(Self { fields })
    }

    /// A required field, stringified for display.
    ///
    /// Only meaningful for the keys validated in [`LogRecord::parse`].
    pub fn required_str(&self, key: &str) -> String {
        scalar_to_string(&self.fields[key])
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `err` object, when present and actually an object.
    pub fn err(&self) -> Option<&Map<String, Value>> {
        self.fields.get("err").and_then(Value::as_object)
    }

    /// Iterate all fields in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// JavaScript-style truthiness over an optional JSON value.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        // Arrays and objects, even empty ones.
        Some(_) => true,
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Number(_) | Value::Bool(_)
    )
}

/// Stringify a scalar the way it reads in the source file.
///
/// Strings come through without quotes; numbers and booleans use their JSON
/// text. Non-scalars (only reachable from optional fields) fall back to
/// compact JSON.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
