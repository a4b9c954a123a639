use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use timesmart_core::conflict::entries_in_conflict;
use timesmart_core::{Conflict, ConflictDetector, Entry, Timetable, Weekday};

use crate::config::CliConfig;
use crate::error::CliError;

/// Timetable and identity sources resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub timetable_path: Option<PathBuf>,
    pub user: Option<String>,
}

impl Context {
    pub fn resolve(
        config: &CliConfig,
        file: Option<PathBuf>,
        user: Option<String>,
    ) -> Self {
        Self {
            timetable_path: config.resolve_timetable_path(file),
            user: config.resolve_user(user),
        }
    }

    pub fn timetable_path(&self) -> Result<&Path, CliError> {
        self.timetable_path.as_deref().ok_or(CliError::NoTimetable)
    }

    pub fn user(&self) -> Result<&str, CliError> {
        self.user.as_deref().ok_or(CliError::NoUser)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryListItem {
    pub id: String,
    pub title: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

pub async fn load_timetable(path: &Path) -> Result<Timetable, CliError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::ReadTimetable {
            path: path.to_path_buf(),
            source,
        })?;
    let timetable = Timetable::from_json(&raw).map_err(|source| CliError::ParseTimetable {
        path: path.to_path_buf(),
        source,
    })?;

    for entry in timetable.inverted_entries() {
        tracing::warn!(
            id = %entry.id,
            start = %entry.start_time,
            end = %entry.end_time,
            "Entry does not end after it starts; clash results for it may be surprising"
        );
    }

    Ok(timetable)
}

/// Detector stamping the current UTC time on each conflict.
pub fn detector_now() -> ConflictDetector {
    ConflictDetector::with_label(Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
}

pub fn parse_day(value: &str) -> Result<Weekday, CliError> {
    Ok(value.parse::<Weekday>()?)
}

pub fn today() -> Weekday {
    Weekday::from_date(chrono::Local::now().date_naive())
}

pub fn format_entry_line(entry: &Entry) -> String {
    let mut line = format!(
        "{}  {}-{}  {}  [{}]",
        entry.day.short_name(),
        entry.start_time,
        entry.end_time,
        entry.title,
        entry.id
    );
    if !entry.room.is_empty() {
        line.push_str(&format!("  @ {}", entry.room));
    }
    if let Some(owner) = &entry.owner {
        line.push_str(&format!("  ({owner})"));
    }
    line
}

pub fn format_entry_lines<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<String> {
    entries.into_iter().map(format_entry_line).collect()
}

pub fn entry_to_list_item(entry: &Entry) -> EntryListItem {
    EntryListItem {
        id: entry.id.to_string(),
        title: entry.title.clone(),
        day: entry.day,
        start_time: entry.start_time.to_string(),
        end_time: entry.end_time.to_string(),
        room: entry.room.clone(),
        kind: entry.kind.label().to_string(),
        owner: entry.owner.clone(),
    }
}

pub fn format_conflict_lines(conflicts: &[&Conflict], entries: &[Entry]) -> Vec<String> {
    let mut lines = Vec::new();
    for conflict in conflicts {
        lines.push(format!(
            "[{}] {}: {}",
            conflict.kind, conflict.id, conflict.message
        ));
        for entry in entries_in_conflict(conflict, entries) {
            lines.push(format!("    {}", format_entry_line(entry)));
        }
    }
    lines
}
