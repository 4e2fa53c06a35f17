//! Pipeline stages for log-to-HTML conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and keeps the
//! one stage with real decision logic ([`fields`]) free of both JSON
//! plumbing and markup syntax.
//!
//! ## Data Flow
//!
//! ```text
//! parse ──▶ fields ──▶ escape ──▶ markup ──▶ document
//! (JSON)   (derive)   (entities)  (<span>)   (template)
//! ```
//!
//! 1. [`parse`]    — JSON-decode a line and validate the required fields;
//!    anything that fails here is plain text, not an error
//! 2. [`fields`]   — derive the fixed display fields: local time-of-day,
//!    padded pid/level, message fallback, pretty-printed residual objects
//! 3. [`escape`]   — HTML-escape each derived field independently
//! 4. [`markup`]   — assemble the per-line `<span>` tree (or the plain-text
//!    fallback wrapper)
//! 5. [`document`] — split the input into lines, convert each in order,
//!    join, and substitute into the page template

pub mod document;
pub mod escape;
pub mod fields;
pub mod markup;
pub mod parse;
