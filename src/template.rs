//! The built-in HTML document template and its placeholder tokens.
//!
//! Centralising the template here serves two purposes:
//!
//! 1. **Single source of truth** — the CSS class names the markup stage
//!    emits ([`crate::pipeline::markup`]) and the rules that style them live
//!    a screen apart, so adding a level or renaming a span touches exactly
//!    two places in one crate.
//!
//! 2. **Testability** — unit tests can assert the template carries each
//!    placeholder exactly once without rendering anything.
//!
//! Callers can override the default via [`crate::config::RenderConfig::template`];
//! the constant here is used only when no override is provided.

/// Placeholder replaced (first occurrence only) with the source label.
pub const FILE_TOKEN: &str = "%file%";

/// Placeholder replaced (first occurrence only) with the converted lines.
pub const BODY_TOKEN: &str = "%body%";

/// File extensions conventionally associated with bole log output.
///
/// Exposed for embedding hosts (build tools, file watchers) that route
/// files to converters by extension; the crate itself never consults it.
pub const FILE_EXTENSIONS: &[&str] = &["bole"];

/// Default document template.
///
/// A dark, monospace page in the style of an editor theme. The converted
/// lines land inside a `<pre>` so the newline-joined markup and the
/// 4-space-indented objects blocks render without further processing.
/// Each placeholder appears exactly once — substitution is first-occurrence
/// only, so a second `%file%` would survive into the output verbatim.
///
/// Styled class tokens: `line-text`, `line-bole`, `span-level-DEBUG`,
/// `span-level-INFO`, `span-level-WARN`, `span-level-ERROR`, `span-time`,
/// `span-level`, `span-pid`, `span-name`, `span-message`, `span-objects`.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>%file%</title>
<style>
  body {
    margin: 0;
    padding: 1em 1.5em;
    background: #1e1e1e;
    color: #d4d4d4;
  }
  pre {
    margin: 0;
    font-family: "SF Mono", Menlo, Consolas, "Liberation Mono", monospace;
    font-size: 13px;
    line-height: 1.45;
  }
  .line-text { color: #808080; }
  .line-bole {}
  .span-time { color: #6a9955; }
  .span-level { font-weight: bold; }
  .span-pid { color: #b5cea8; }
  .span-name { color: #9cdcfe; }
  .span-message {}
  .span-objects { color: #ce9178; }
  .span-level-DEBUG .span-level { color: #569cd6; }
  .span-level-INFO  .span-level { color: #d4d4d4; }
  .span-level-WARN  .span-level { color: #dcdcaa; }
  .span-level-ERROR .span-level { color: #f44747; }
  .span-level-ERROR .span-message { color: #f44747; }
</style>
</head>
<body>
<pre>%body%</pre>
</body>
</html>
"#;
