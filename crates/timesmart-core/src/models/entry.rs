//! Timetable entry model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{TimeOfDay, Weekday};
use crate::util::normalize_text_option;

/// Identifier of a timetable entry.
///
/// Opaque to the detector. Fresh ids are UUID v7 strings, but ids coming from
/// existing snapshots (e.g. `"1"`) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create a new unique entry ID using UUID v7
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind of class an entry represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[default]
    #[serde(rename = "Lecture")]
    Lecture,
    #[serde(rename = "Lab / Practical", alias = "Lab")]
    Lab,
    #[serde(rename = "Tutorial")]
    Tutorial,
}

impl EntryKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Lab => "Lab / Practical",
            Self::Tutorial => "Tutorial",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled occurrence on the weekly timetable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub room: String,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: EntryKind,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_trimmed"
    )]
    pub instructor: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_trimmed"
    )]
    pub color: Option<String>,
    /// Identity (email) of the user who created the entry. `None` in
    /// single-tenant timetables.
    #[serde(
        default,
        alias = "userEmail",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_trimmed"
    )]
    pub owner: Option<String>,
}

impl Entry {
    /// Create a lecture entry with a generated id and no optional metadata
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        day: Weekday,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            title: title.into(),
            day,
            start_time,
            end_time,
            room: String::new(),
            kind: EntryKind::default(),
            instructor: None,
            color: None,
            owner: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = normalize_text_option(Some(instructor.into()));
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = normalize_text_option(Some(color.into()));
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = normalize_text_option(Some(owner.into()));
        self
    }

    /// Whether the entry ends strictly after it starts.
    ///
    /// Entries failing this check are still compared by the detector as-is.
    #[must_use]
    pub fn has_positive_duration(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Length in minutes, or `None` when the entry does not end after it starts
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u16> {
        self.end_time
            .minutes_since_midnight()
            .checked_sub(self.start_time.minutes_since_midnight())
            .filter(|minutes| *minutes > 0)
    }

    #[must_use]
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner.as_deref() == Some(owner)
    }
}

fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_text_option(Option::<String>::deserialize(
        deserializer,
    )?))
}
