//! Caller-owned timetable collection
//!
//! The timetable keeps entries in insertion order and never caches conflicts:
//! callers mutate it and then ask for a fresh detection run.

use serde::{Deserialize, Serialize};

use crate::conflict::ConflictDetector;
use crate::models::{Conflict, Entry, EntryId, Weekday};
use crate::{Error, Result};

/// Ordered set of entries with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    entries: Vec<Entry>,
}

impl Timetable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wrap an existing snapshot. Entries are kept as given, duplicates
    /// included, since the detector compares them as-is.
    #[must_use]
    pub const fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries = serde_json::from_str::<Vec<Entry>>(raw)?;
        tracing::debug!(entries = entries.len(), "Loaded timetable snapshot");
        Ok(Self::from_entries(entries))
    }

    /// Render the snapshot as a pretty-printed JSON array
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Append an entry, rejecting an id already present
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        if self.get(&entry.id).is_some() {
            return Err(Error::DuplicateEntry(entry.id.to_string()));
        }
        tracing::debug!(id = %entry.id, title = %entry.title, "Added timetable entry");
        self.entries.push(entry);
        Ok(())
    }

    /// Replace the entry with the same id, keeping its position
    pub fn update(&mut self, entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
            .ok_or_else(|| Error::EntryNotFound(entry.id.to_string()))?;
        tracing::debug!(id = %entry.id, "Updated timetable entry");
        *slot = entry;
        Ok(())
    }

    /// Remove and return the entry with `id`
    pub fn remove(&mut self, id: &EntryId) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| Error::EntryNotFound(id.to_string()))?;
        tracing::debug!(%id, "Removed timetable entry");
        Ok(self.entries.remove(index))
    }

    /// Entries on `day`, earliest start first
    #[must_use]
    pub fn schedule_for(&self, day: Weekday) -> Vec<&Entry> {
        let mut schedule = self
            .entries
            .iter()
            .filter(|entry| entry.day == day)
            .collect::<Vec<_>>();
        schedule.sort_by_key(|entry| entry.start_time);
        schedule
    }

    /// All entries ordered by weekday, then start time
    #[must_use]
    pub fn weekly_schedule(&self) -> Vec<&Entry> {
        let mut schedule = self.entries.iter().collect::<Vec<_>>();
        schedule.sort_by_key(|entry| (entry.day, entry.start_time));
        schedule
    }

    /// Entries whose start is not before their end
    #[must_use]
    pub fn inverted_entries(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| !entry.has_positive_duration())
            .collect()
    }

    /// Run clash detection over the current entries
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        self.detect_conflicts_with(&ConflictDetector::default())
    }

    #[must_use]
    pub fn detect_conflicts_with(&self, detector: &ConflictDetector) -> Vec<Conflict> {
        detector.detect(&self.entries)
    }
}

impl From<Vec<Entry>> for Timetable {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}
