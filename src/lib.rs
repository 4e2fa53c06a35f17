//! # bole2html
//!
//! Convert [bole](https://github.com/rvagg/bole)-style JSON log files into
//! syntax-highlighted HTML for viewing in a browser.
//!
//! ## Why this crate?
//!
//! Structured JSON logs are great for machines and miserable for humans:
//! a raw `tail` shows one dense object per line with the message buried in
//! the middle. This crate renders each record as a colour-coded line —
//! time, level, pid, logger name, message — with any residual structured
//! fields (and error stack traces) pretty-printed underneath, then wraps
//! the whole file in a self-contained HTML document.
//!
//! Lines that are *not* valid log records (stack continuations, blank
//! lines, stray text) pass through escaped and verbatim rather than
//! breaking the conversion.
//!
//! ## Pipeline Overview
//!
//! ```text
//! log file
//!  │
//!  ├─ 1. Parse     JSON-decode each line, check required fields
//!  ├─ 2. Fields    derive time-of-day, padded pid/level, message fallback,
//!  │               pretty-printed residual objects
//!  ├─ 3. Escape    HTML-escape every field independently
//!  ├─ 4. Markup    assemble per-line <span> tree (or plain-text fallback)
//!  └─ 5. Document  join lines, substitute into the page template
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use bole2html::{render, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let input = r#"{"time":"2016-02-04T13:46:41.312Z","hostname":"h","pid":42,"level":"info","name":"app","message":"started"}"#;
//! let output = render(input, "app.log", &config);
//! assert!(output.html.contains("span-message"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `bole2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! bole2html = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod template;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder};
pub use convert::{inspect, render, render_file, render_to_string};
pub use error::Bole2HtmlError;
pub use output::{RenderOutput, RenderStats, SourceStats};
pub use pipeline::markup::convert_line;
pub use template::{BODY_TOKEN, DEFAULT_TEMPLATE, FILE_EXTENSIONS, FILE_TOKEN};
