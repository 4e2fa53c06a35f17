//! Error types for the bole2html library.
//!
//! Only the I/O shell can fail. Line conversion itself is a total function:
//! a line that cannot be decoded, or that is missing a required field, is
//! rendered through the escaped plain-text fallback rather than reported as
//! an error — mixed log files routinely contain stack-trace continuations
//! and unrelated text, and one such line must never sink the whole document.
//!
//! [`Bole2HtmlError`] therefore covers exactly the fatal cases: the input
//! file cannot be read, a custom template cannot be read or is unusable, or
//! the output cannot be written.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the bole2html library.
///
/// Per-line failures have no representation here — see the module docs.
#[derive(Debug, Error)]
pub enum Bole2HtmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input log file was not found at the given path.
    #[error("Log file not found: '{}'\nCheck the path exists and is readable.", path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the input file.
    #[error("Permission denied reading '{}'\nTry: chmod +r {path:?}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("Failed to read log file '{}': {source}", path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Template errors ───────────────────────────────────────────────────
    /// A custom template file was given but could not be read.
    #[error("Failed to read template file '{}': {source}", path.display())]
    TemplateReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
