//! Read-side helpers over a detected conflict list

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Conflict, ConflictKind, Entry, EntryId};

/// Counts shown on dashboards and reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    /// Number of conflict records
    pub total: usize,
    /// Distinct entries taking part in at least one conflict
    pub involved_entries: usize,
    pub time_clashes: usize,
    pub room_clashes: usize,
    pub instructor_clashes: usize,
}

impl ConflictSummary {
    #[must_use]
    pub fn from_conflicts(conflicts: &[Conflict]) -> Self {
        let involved = conflicts
            .iter()
            .flat_map(|conflict| conflict.entry_ids.iter())
            .collect::<HashSet<&EntryId>>();
        let count = |kind: ConflictKind| {
            conflicts
                .iter()
                .filter(|conflict| conflict.kind == kind)
                .count()
        };

        Self {
            total: conflicts.len(),
            involved_entries: involved.len(),
            time_clashes: count(ConflictKind::TimeClash),
            room_clashes: count(ConflictKind::RoomClash),
            instructor_clashes: count(ConflictKind::InstructorClash),
        }
    }

    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.total == 0
    }
}

/// Entries participating in `conflict`, in snapshot order.
///
/// Entries removed since detection ran are simply absent from the result.
#[must_use]
pub fn entries_in_conflict<'a>(conflict: &Conflict, entries: &'a [Entry]) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| conflict.involves(&entry.id))
        .collect()
}

/// Conflicts touching at least one entry owned by `owner`.
#[must_use]
pub fn conflicts_for_owner<'a>(
    conflicts: &'a [Conflict],
    entries: &[Entry],
    owner: &str,
) -> Vec<&'a Conflict> {
    let owned = entries
        .iter()
        .filter(|entry| entry.is_owned_by(owner))
        .map(|entry| &entry.id)
        .collect::<HashSet<_>>();

    conflicts
        .iter()
        .filter(|conflict| conflict.entry_ids.iter().any(|id| owned.contains(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::conflict::detect_conflicts;
    use crate::models::Weekday;

    fn entry(id: &str, day: Weekday, start: &str, end: &str, owner: &str) -> Entry {
        Entry::new(
            format!("Class {id}"),
            day,
            start.parse().unwrap(),
            end.parse().unwrap(),
        )
        .with_id(id)
        .with_owner(owner)
    }

    fn fixture() -> Vec<Entry> {
        vec![
            entry("1", Weekday::Monday, "09:00", "11:00", "alice@example.com"),
            entry("2", Weekday::Monday, "10:00", "12:00", "alice@example.com"),
            entry("3", Weekday::Monday, "10:30", "11:30", "bob@example.com"),
            entry("4", Weekday::Friday, "10:30", "11:30", "carol@example.com"),
        ]
    }

    #[test]
    fn summary_counts_kinds_and_distinct_entries() {
        let conflicts = detect_conflicts(&fixture());
        let summary = ConflictSummary::from_conflicts(&conflicts);

        assert_eq!(
            summary,
            ConflictSummary {
                total: 3,
                involved_entries: 3,
                time_clashes: 1,
                room_clashes: 2,
                instructor_clashes: 0,
            }
        );
        assert!(!summary.is_clear());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = ConflictSummary::from_conflicts(&detect_conflicts(&fixture()));
        let value = serde_json::to_value(summary).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "total": 3,
                "involvedEntries": 3,
                "timeClashes": 1,
                "roomClashes": 2,
                "instructorClashes": 0,
            })
        );
    }

    #[test]
    fn empty_summary_is_clear() {
        assert!(ConflictSummary::from_conflicts(&[]).is_clear());
    }

    #[test]
    fn entries_in_conflict_intersects_ids() {
        let entries = fixture();
        let conflicts = detect_conflicts(&entries);

        let involved = entries_in_conflict(&conflicts[0], &entries)
            .into_iter()
            .map(|entry| entry.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(involved, vec!["1", "2"]);
    }

    #[test]
    fn conflicts_for_owner_filters_by_participation() {
        let entries = fixture();
        let conflicts = detect_conflicts(&entries);

        let bob = conflicts_for_owner(&conflicts, &entries, "bob@example.com")
            .into_iter()
            .map(|conflict| conflict.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(bob, vec!["c-1-3", "c-2-3"]);

        assert!(conflicts_for_owner(&conflicts, &entries, "carol@example.com").is_empty());
    }
}
