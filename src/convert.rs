//! Eager conversion entry points.
//!
//! [`render`] is the pure core: text in, HTML out, cannot fail. The
//! file-based wrappers around it ([`render_to_string`], [`render_file`])
//! own all the I/O and are the only functions in the crate that return
//! [`Bole2HtmlError`]. [`inspect`] reports what a file contains without
//! converting it.

use crate::config::RenderConfig;
use crate::error::Bole2HtmlError;
use crate::output::{RenderOutput, RenderStats, SourceStats};
use crate::pipeline::{document, fields, parse};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Render input text to a complete HTML document.
///
/// This is the primary entry point for the library. `source_label` is the
/// human-readable name substituted into the template's filename slot
/// (overridden by [`RenderConfig::source_label`] when set).
///
/// Never fails: malformed lines degrade to escaped plain text, and the
/// template substitution cannot error.
pub fn render(input_text: &str, source_label: &str, config: &RenderConfig) -> RenderOutput {
    let start = Instant::now();
    let offset = resolve_offset(config);
    let label = config.source_label.as_deref().unwrap_or(source_label);

    let (body, tally) = document::render_body(input_text, offset);
    let html = document::substitute(config.template_text(), label, &body);

    let stats = RenderStats {
        total_lines: tally.total(),
        record_lines: tally.records,
        text_lines: tally.text,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    debug!(
        "Rendered {} lines ({} records, {} text) in {}ms",
        stats.total_lines, stats.record_lines, stats.text_lines, stats.duration_ms
    );

    RenderOutput { html, stats }
}

/// Read a log file and render it, returning the HTML without writing it.
pub fn render_to_string(
    input_path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, Bole2HtmlError> {
    let input_path = input_path.as_ref();
    let content = read_input(input_path)?;
    Ok(render(&content, &input_path.display().to_string(), config))
}

/// Convert a log file and write the HTML document to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn render_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderStats, Bole2HtmlError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    info!("Converting {} -> {}", input_path.display(), output_path.display());

    let output = render_to_string(input_path, config)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Bole2HtmlError::OutputWriteFailed {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    }

    // Atomic write: write to temp, then rename.
    let tmp_path = output_path.with_extension("html.tmp");
    std::fs::write(&tmp_path, &output.html).map_err(|e| Bole2HtmlError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, output_path).map_err(|e| Bole2HtmlError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!(
        "Wrote {} ({} lines, {} records)",
        output_path.display(),
        output.stats.total_lines,
        output.stats.record_lines
    );
    Ok(output.stats)
}

/// Report what a log file contains without converting it.
///
/// Counts structured-record lines vs. plain-text lines and tallies records
/// per (uppercased) level.
pub fn inspect(input_path: impl AsRef<Path>) -> Result<SourceStats, Bole2HtmlError> {
    let content = read_input(input_path.as_ref())?;

    let mut stats = SourceStats::default();
    for line in content.split('\n') {
        stats.total_lines += 1;
        match parse::LogRecord::parse(line) {
            Some(record) => {
                stats.record_lines += 1;
                let level = record.required_str("level").to_uppercase();
                *stats.levels.entry(level).or_insert(0) += 1;
            }
            None => stats.text_lines += 1,
        }
    }
    Ok(stats)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// The UTC offset for this run: configured, or the machine's current one.
fn resolve_offset(config: &RenderConfig) -> i32 {
    config
        .utc_offset_minutes
        .unwrap_or_else(fields::local_offset_minutes)
}

/// Read the input file, mapping I/O failures onto the error taxonomy.
fn read_input(path: &Path) -> Result<String, Bole2HtmlError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Bole2HtmlError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Bole2HtmlError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(Bole2HtmlError::InputReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
