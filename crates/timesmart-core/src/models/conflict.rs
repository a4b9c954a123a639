//! Conflict model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntryId;

/// Identifier of a conflict, derived from the two entry ids: `c-<id1>-<id2>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictId(String);

impl ConflictId {
    #[must_use]
    pub fn for_pair(first: &EntryId, second: &EntryId) -> Self {
        Self(format!("c-{first}-{second}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a clash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// Same owner (or no owner) double-booked
    TimeClash,
    /// Entries of two different owners share a slot
    RoomClash,
    /// Same instructor double-booked. Never produced by the detector.
    InstructorClash,
}

impl ConflictKind {
    /// Label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TimeClash => "Critical Clash",
            Self::RoomClash => "Room Double-Booked",
            Self::InstructorClash => "Instructor Conflict",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two entries overlapping on the same weekday.
///
/// Always derived from an entry snapshot; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: ConflictId,
    pub kind: ConflictKind,
    /// The two entries involved, in input order
    pub entry_ids: [EntryId; 2],
    pub message: String,
    pub detected_at: String,
}

impl Conflict {
    #[must_use]
    pub fn involves(&self, id: &EntryId) -> bool {
        self.entry_ids.contains(id)
    }
}
