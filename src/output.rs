//! Output types: rendered HTML plus run statistics.
//!
//! Everything here derives `Serialize` so the CLI's `--json` mode can dump
//! results for scripting without a second code path.

use serde::Serialize;
use std::collections::BTreeMap;

/// The result of rendering one input text.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    /// The complete HTML document.
    pub html: String,
    /// How the conversion went.
    pub stats: RenderStats,
}

/// Statistics for one rendering run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderStats {
    /// Total input lines (empty lines included).
    pub total_lines: usize,
    /// Lines rendered as structured log records.
    pub record_lines: usize,
    /// Lines rendered through the plain-text fallback.
    pub text_lines: usize,
    /// Wall-clock conversion time in milliseconds.
    pub duration_ms: u64,
}

/// What [`crate::convert::inspect`] finds in a log file, without converting it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceStats {
    /// Total input lines (empty lines included).
    pub total_lines: usize,
    /// Lines that parse as structured log records.
    pub record_lines: usize,
    /// Lines that do not.
    pub text_lines: usize,
    /// Record count per uppercased level, sorted by level name.
    pub levels: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialise_to_json() {
        let stats = RenderStats {
            total_lines: 10,
            record_lines: 8,
            text_lines: 2,
            duration_ms: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"record_lines\":8"));
    }

    #[test]
    fn source_stats_levels_sort_by_name() {
        let mut stats = SourceStats::default();
        stats.levels.insert("WARN".into(), 1);
        stats.levels.insert("DEBUG".into(), 2);
        let keys: Vec<&String> = stats.levels.keys().collect();
        assert_eq!(keys, ["DEBUG", "WARN"]);
    }
}
