//! CLI binary for bole2html.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `RenderConfig` and prints results.

use anyhow::{Context, Result};
use bole2html::{inspect, render_file, render_to_string, RenderConfig};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  bole2html server.log

  # Convert to file
  bole2html server.log -o server.html

  # Custom page template and label
  bole2html --template page.html --label "api (staging)" server.log -o out.html

  # Pin the timezone for reproducible output (UTC+2)
  bole2html --utc-offset-minutes 120 server.log -o out.html

  # Inspect a log file without converting it
  bole2html --inspect-only server.log
  bole2html --inspect-only --json server.log

INPUT FORMAT:
  One JSON object per line with the bole header fields
    time, hostname, pid, level, name
  plus optional message, err {name, message, stack} and arbitrary
  user-defined fields. Lines that are not valid records (stack
  continuations, blank lines, stray text) are rendered escaped and
  verbatim — they never fail the conversion.

TEMPLATES:
  A template is any text containing the tokens %file% and %body%.
  Each token is substituted once (first occurrence). The built-in
  template styles these CSS classes:
    line-text  line-bole  span-time  span-level  span-pid
    span-name  span-message  span-objects  span-level-<LEVEL>
"#;

/// Convert bole JSON log files to syntax-highlighted HTML.
#[derive(Parser, Debug)]
#[command(
    name = "bole2html",
    version,
    about = "Convert bole JSON log files to syntax-highlighted HTML",
    long_about = "Convert bole-format log files (one JSON object per line) to a \
self-contained HTML document with per-field highlighting. Malformed or foreign \
lines pass through escaped rather than failing the conversion.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input log file path.
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "BOLE2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Path to a custom page template (must contain %file% and %body%).
    #[arg(long, env = "BOLE2HTML_TEMPLATE")]
    template: Option<PathBuf>,

    /// Label for the template's filename slot (default: the input path).
    #[arg(long, env = "BOLE2HTML_LABEL")]
    label: Option<String>,

    /// Fixed UTC offset in minutes for the time column (default: machine-local).
    #[arg(long, env = "BOLE2HTML_UTC_OFFSET", allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,

    /// Print line/level statistics only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Output statistics as JSON (with --inspect-only or the -o summary).
    #[arg(long, env = "BOLE2HTML_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "BOLE2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "BOLE2HTML_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library logs go to stderr so stdout stays clean for the HTML.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let stats = inspect(&cli.input).context("Failed to inspect log file")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
            );
        } else {
            println!("File:     {}", cli.input.display());
            println!("Lines:    {}", stats.total_lines);
            println!("Records:  {}", stats.record_lines);
            println!("Text:     {}", stats.text_lines);
            for (level, count) in &stats.levels {
                println!("  {level:<5} {count}");
            }
        }
        return Ok(());
    }

    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats =
            render_file(&cli.input, output_path, &config).context("Conversion failed")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
            );
        } else if !cli.quiet {
            eprintln!(
                "{}  {} lines ({} records, {} text)  {}ms  →  {}",
                green("✔"),
                stats.total_lines,
                stats.record_lines,
                stats.text_lines,
                stats.duration_ms,
                bold(&output_path.display().to_string()),
            );
        }
    } else {
        let output = render_to_string(&cli.input, &config).context("Conversion failed")?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.html.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.html.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }

        if !cli.quiet {
            eprintln!(
                "   {}",
                dim(&format!(
                    "{} lines ({} records, {} text) — {}ms",
                    output.stats.total_lines,
                    output.stats.record_lines,
                    output.stats.text_lines,
                    output.stats.duration_ms
                ))
            );
        }
    }

    Ok(())
}

/// Map CLI args to `RenderConfig`.
fn build_config(cli: &Cli) -> Result<RenderConfig> {
    let mut builder = RenderConfig::builder();

    if let Some(ref path) = cli.template {
        let template = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template from {:?}", path))?;
        builder = builder.template(template);
    }
    if let Some(ref label) = cli.label {
        builder = builder.source_label(label.clone());
    }
    if let Some(minutes) = cli.utc_offset_minutes {
        builder = builder.utc_offset_minutes(minutes);
    }

    builder.build().context("Invalid configuration")
}
