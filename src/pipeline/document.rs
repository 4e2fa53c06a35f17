//! Document assembly: convert a whole input text and wrap it in a template.
//!
//! Pure sequencing, no decision logic: split on newlines (preserving empty
//! lines so output line *i* always corresponds to input line *i*), convert
//! each line independently and in order, join, substitute into the page
//! template.
//!
//! ## Single substitution, by design
//!
//! Each placeholder token is replaced exactly once ([`str::replacen`] with
//! a count of 1). A template carrying a token twice keeps the second
//! occurrence verbatim — an inherited contract of the template format, and
//! also what keeps a log line that happens to *contain* `%body%` from ever
//! being re-expanded.

use crate::pipeline::markup;
use crate::pipeline::parse::LogRecord;
use crate::template::{BODY_TOKEN, FILE_TOKEN};

/// How the lines of one conversion broke down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    /// Lines rendered as structured records.
    pub records: usize,
    /// Lines rendered through the plain-text fallback.
    pub text: usize,
}

impl LineTally {
    pub fn total(&self) -> usize {
        self.records + self.text
    }
}

/// Convert every line of `input`, joining the results with newlines.
///
/// Returns the joined markup body and a tally of record vs. plain-text
/// lines. The body always has exactly as many lines as the input.
pub fn render_body(input: &str, utc_offset_minutes: i32) -> (String, LineTally) {
    let mut tally = LineTally::default();
    let converted: Vec<String> = input
        .split('\n')
        .map(|line| match LogRecord::parse(line) {
            Some(record) => {
                tally.records += 1;
                markup::render_record(&record, utc_offset_minutes)
            }
            None => {
                tally.text += 1;
                markup::render_fallback(line)
            }
        })
        .collect();
    (converted.join("\n"), tally)
}

/// Substitute the label and body into a template.
///
/// Replaces the first occurrence of [`FILE_TOKEN`] with `label`, then the
/// first occurrence of [`BODY_TOKEN`] with `body` — in that order, matching
/// the original substitution sequence.
pub fn substitute(template: &str, label: &str, body: &str) -> String {
    template
        .replacen(FILE_TOKEN, label, 1)
        .replacen(BODY_TOKEN, body, 1)
}

/// Full batch conversion: input text to a complete HTML document.
pub fn render_document(
    input: &str,
    source_label: &str,
    template: &str,
    utc_offset_minutes: i32,
) -> String {
    let (body, _) = render_body(input, utc_offset_minutes);
    substitute(template, source_label, &body)
}
