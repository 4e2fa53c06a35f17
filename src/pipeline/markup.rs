//! Markup assembly: one line of input to one line of HTML.
//!
//! [`convert_line`] is the public per-line contract: a total function that
//! never panics and never errors. Structured records become a `<span>`
//! tree; everything else becomes the escaped plain-text fallback.
//!
//! The level-specific class embeds the *padded, escaped* level, so a
//! four-letter level produces `class="span-level-WARN "` — the trailing
//! space is an (empty) extra class token to a browser and the CSS
//! selectors target the unpadded name. Preserved for compatibility with
//! existing stylesheets written against this output.

use crate::pipeline::escape::escape_html;
use crate::pipeline::fields::RenderFields;
use crate::pipeline::parse::LogRecord;

/// Convert one line of log text to one line of HTML markup.
///
/// `utc_offset_minutes` shifts record timestamps into local time of day;
/// see [`crate::pipeline::fields::local_offset_minutes`].
///
/// Never fails: lines that do not decode as structured records are wrapped
/// escaped and verbatim in a `line-text` span.
pub fn convert_line(line: &str, utc_offset_minutes: i32) -> String {
    match LogRecord::parse(line) {
        Some(record) => render_record(&record, utc_offset_minutes),
        None => render_fallback(line),
    }
}

/// The escaped-verbatim fallback for non-record lines.
pub(crate) fn render_fallback(line: &str) -> String {
    format!(r#"<span class="line-text">{}</span>"#, escape_html(line))
}

/// The structural `<span>` tree for a valid record.
pub(crate) fn render_record(record: &LogRecord, utc_offset_minutes: i32) -> String {
    let fields = RenderFields::derive(record, utc_offset_minutes);

    let time = escape_html(&fields.time);
    let pid = escape_html(&fields.pid);
    let level = escape_html(&fields.level);
    let name = escape_html(&fields.name);
    let message = escape_html(&fields.message);
    let objects = escape_html(&fields.objects);

    let objects_span = if objects.is_empty() {
        String::new()
    } else {
        format!(r#"<br><span class="span-objects">{objects}</span>"#)
    };

    format!(
        concat!(
            r#"<span class="line-bole">"#,
            r#"<span class="span-level-{level}">"#,
            r#"<span class="span-time">{time}</span>"#,
            " ",
            r#"<span class="span-level">{level}</span>"#,
            " ",
            r#"<span class="span-pid">{pid}</span>"#,
            " ",
            r#"<span class="span-name">{name}</span>"#,
            " - ",
            r#"<span class="span-message">{message}</span>"#,
            "{objects_span}",
            "</span>",
            "</span>",
        ),
        level = level,
        time = time,
        pid = pid,
        name = name,
        message = message,
        objects_span = objects_span,
    )
}
