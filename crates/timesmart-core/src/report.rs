//! Conflict report rendering shared by all front ends.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::conflict::{entries_in_conflict, ConflictSummary};
use crate::models::{Conflict, Entry};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Serializable conflict report: summary counts plus every conflict record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictReport<'a> {
    pub summary: ConflictSummary,
    pub conflicts: &'a [Conflict],
}

impl<'a> ConflictReport<'a> {
    #[must_use]
    pub fn new(conflicts: &'a [Conflict]) -> Self {
        Self {
            summary: ConflictSummary::from_conflicts(conflicts),
            conflicts,
        }
    }
}

/// One-line description of an entry, e.g.
/// `Subject: Advanced Math (Starts: 10:30, Ends: 12:00)`.
#[must_use]
pub fn describe_entry(entry: &Entry) -> String {
    format!(
        "Subject: {} (Starts: {}, Ends: {})",
        entry.title, entry.start_time, entry.end_time
    )
}

/// Render conflicts as pretty-printed JSON.
pub fn render_json_report(conflicts: &[Conflict]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ConflictReport::new(conflicts))
}

/// Render conflicts as a Markdown document listing each clash and its entries.
#[must_use]
pub fn render_markdown_report(conflicts: &[Conflict], entries: &[Entry]) -> String {
    let summary = ConflictSummary::from_conflicts(conflicts);
    let mut output = String::new();

    let _ = writeln!(output, "# Clash report");
    let _ = writeln!(output);
    let _ = writeln!(output, "- Conflicts: {}", summary.total);
    let _ = writeln!(output, "- Entries involved: {}", summary.involved_entries);

    if summary.is_clear() {
        let _ = writeln!(output);
        let _ = writeln!(output, "No clashes detected.");
        return output;
    }

    for conflict in conflicts {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {} ({})", conflict.kind, conflict.id);
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", conflict.message);
        let _ = writeln!(output);
        for entry in entries_in_conflict(conflict, entries) {
            let _ = writeln!(output, "- {}, {}", entry.day, describe_entry(entry));
        }
        let _ = writeln!(output, "- Detected: {}", conflict.detected_at);
    }

    output
}

/// Render conflicts based on selected report format.
pub fn render_report(
    conflicts: &[Conflict],
    entries: &[Entry],
    format: ReportFormat,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Json => render_json_report(conflicts),
        ReportFormat::Markdown => Ok(render_markdown_report(conflicts, entries)),
    }
}

/// Build a deterministic default file name for report flows.
#[must_use]
pub fn suggested_report_file_name(format: ReportFormat, timestamp_ms: i64) -> String {
    format!("timesmart-clashes-{timestamp_ms}.{}", format.extension())
}
