//! Clash detection for weekly timetables
//!
//! Every unordered pair of entries is compared exactly once, in `(i, j)`
//! order with `i < j`. Two entries clash when they share a weekday and their
//! half-open intervals `[start, end)` intersect, so back-to-back classes do
//! not clash. Each clashing pair yields its own [`Conflict`]; records are
//! never grouped.

mod summary;

pub use summary::{conflicts_for_owner, entries_in_conflict, ConflictSummary};

use crate::models::{Conflict, ConflictId, ConflictKind, Entry};

/// Label stamped on conflicts when the caller does not supply one
pub const DEFAULT_DETECTED_AT: &str = "Just now";

/// Stateless clash detector.
///
/// Holds only the `detected_at` label copied into every record, so repeated
/// calls on the same snapshot return identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictDetector {
    detected_at: String,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::with_label(DEFAULT_DETECTED_AT)
    }
}

impl ConflictDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector stamping `label` as the detection time of each conflict
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            detected_at: label.into(),
        }
    }

    #[must_use]
    pub fn detected_at(&self) -> &str {
        &self.detected_at
    }

    /// Find every same-day overlapping pair in `entries`.
    ///
    /// Output order follows the nested pair enumeration: increasing `i`, then
    /// increasing `j > i`.
    #[must_use]
    pub fn detect(&self, entries: &[Entry]) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for (i, first) in entries.iter().enumerate() {
            for second in &entries[i + 1..] {
                if first.day != second.day || !entries_overlap(first, second) {
                    continue;
                }
                conflicts.push(self.build_conflict(first, second));
            }
        }

        tracing::debug!(
            entries = entries.len(),
            conflicts = conflicts.len(),
            "Clash detection finished"
        );
        conflicts
    }

    fn build_conflict(&self, first: &Entry, second: &Entry) -> Conflict {
        let kind = classify(first, second);
        Conflict {
            id: ConflictId::for_pair(&first.id, &second.id),
            kind,
            entry_ids: [first.id.clone(), second.id.clone()],
            message: conflict_message(kind, first, second),
            detected_at: self.detected_at.clone(),
        }
    }
}

/// Detect clashes with the default `"Just now"` label.
///
/// # Examples
///
/// ```
/// use timesmart_core::conflict::detect_conflicts;
/// use timesmart_core::models::{Entry, Weekday};
///
/// let cs = Entry::new("CS 101", Weekday::Tuesday, "10:00".parse()?, "12:00".parse()?).with_id("1");
/// let math = Entry::new("Math", Weekday::Tuesday, "10:30".parse()?, "12:00".parse()?).with_id("2");
///
/// let conflicts = detect_conflicts(&[cs, math]);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].id.as_str(), "c-1-2");
/// assert_eq!(conflicts[0].message, "CS 101 overlaps with Math on Tuesdays.");
/// # Ok::<(), timesmart_core::Error>(())
/// ```
#[must_use]
pub fn detect_conflicts(entries: &[Entry]) -> Vec<Conflict> {
    ConflictDetector::default().detect(entries)
}

/// Half-open interval intersection on minutes since midnight.
#[must_use]
pub const fn intervals_overlap(start1: u16, end1: u16, start2: u16, end2: u16) -> bool {
    start1 < end2 && start2 < end1
}

fn entries_overlap(first: &Entry, second: &Entry) -> bool {
    intervals_overlap(
        first.start_time.minutes_since_midnight(),
        first.end_time.minutes_since_midnight(),
        second.start_time.minutes_since_midnight(),
        second.end_time.minutes_since_midnight(),
    )
}

/// Rendered in the cross-tenant message for an entry that has no owner.
pub const UNOWNED_LABEL: &str = "unowned";

/// Entries whose owners differ clash across tenants; anything else is the
/// owner double-booking themselves. A missing owner counts as its own value,
/// so an owner-less entry against an owned one is cross-tenant.
fn classify(first: &Entry, second: &Entry) -> ConflictKind {
    if first.owner == second.owner {
        ConflictKind::TimeClash
    } else {
        ConflictKind::RoomClash
    }
}

fn conflict_message(kind: ConflictKind, first: &Entry, second: &Entry) -> String {
    match kind {
        ConflictKind::RoomClash => format!(
            "Global Clash: {} ({}) overlaps with {} ({}) on {}s.",
            first.title,
            first.owner.as_deref().unwrap_or(UNOWNED_LABEL),
            second.title,
            second.owner.as_deref().unwrap_or(UNOWNED_LABEL),
            first.day
        ),
        ConflictKind::TimeClash | ConflictKind::InstructorClash => format!(
            "{} overlaps with {} on {}s.",
            first.title, second.title, first.day
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{EntryId, Weekday};

    fn entry(id: &str, title: &str, day: Weekday, start: &str, end: &str) -> Entry {
        Entry::new(title, day, start.parse().unwrap(), end.parse().unwrap()).with_id(id)
    }

    fn pair_set(conflicts: &[Conflict]) -> BTreeSet<BTreeSet<EntryId>> {
        conflicts
            .iter()
            .map(|conflict| conflict.entry_ids.iter().cloned().collect())
            .collect()
    }

    #[test]
    fn same_owner_overlap_is_time_clash() {
        let entries = vec![
            entry("1", "Computer Science 101", Weekday::Tuesday, "10:00", "12:00")
                .with_owner("alice@example.com"),
            entry("2", "Advanced Math", Weekday::Tuesday, "10:30", "12:00")
                .with_owner("alice@example.com"),
        ];

        let conflicts = detect_conflicts(&entries);

        assert_eq!(
            conflicts,
            vec![Conflict {
                id: ConflictId::for_pair(&"1".into(), &"2".into()),
                kind: ConflictKind::TimeClash,
                entry_ids: ["1".into(), "2".into()],
                message: "Computer Science 101 overlaps with Advanced Math on Tuesdays."
                    .to_string(),
                detected_at: "Just now".to_string(),
            }]
        );
        assert_eq!(conflicts[0].id.as_str(), "c-1-2");
    }

    #[test]
    fn different_owners_overlap_is_room_clash() {
        let entries = vec![
            entry("1", "Computer Science 101", Weekday::Tuesday, "10:00", "12:00")
                .with_owner("alice@example.com"),
            entry("2", "Advanced Math", Weekday::Tuesday, "10:30", "12:00")
                .with_owner("bob@example.com"),
        ];

        let conflicts = detect_conflicts(&entries);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomClash);
        assert_eq!(
            conflicts[0].message,
            "Global Clash: Computer Science 101 (alice@example.com) overlaps with \
             Advanced Math (bob@example.com) on Tuesdays."
        );
        assert!(conflicts[0].message.starts_with("Global Clash: "));
    }

    #[test]
    fn owner_presence_mismatch_is_room_clash() {
        let entries = vec![
            entry("1", "A", Weekday::Monday, "09:00", "10:00"),
            entry("2", "B", Weekday::Monday, "09:30", "10:30").with_owner("bob@example.com"),
            entry("3", "C", Weekday::Monday, "09:45", "10:15"),
        ];

        let kinds = detect_conflicts(&entries)
            .into_iter()
            .map(|conflict| (conflict.id.to_string(), conflict.kind))
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                ("c-1-2".to_string(), ConflictKind::RoomClash),
                ("c-1-3".to_string(), ConflictKind::TimeClash),
                ("c-2-3".to_string(), ConflictKind::RoomClash),
            ]
        );
    }

    #[test]
    fn unowned_seed_against_owned_entry_names_placeholder() {
        let entries = vec![
            entry("seed", "Seed", Weekday::Tuesday, "10:00", "12:00"),
            entry("mine", "Mine", Weekday::Tuesday, "10:30", "12:00")
                .with_owner("alice@example.com"),
        ];

        let conflicts = detect_conflicts(&entries);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomClash);
        assert_eq!(
            conflicts[0].message,
            "Global Clash: Seed (unowned) overlaps with Mine (alice@example.com) on Tuesdays."
        );
    }

    #[test]
    fn different_days_never_clash() {
        let entries = vec![
            entry("1", "A", Weekday::Monday, "10:00", "12:00"),
            entry("2", "B", Weekday::Tuesday, "10:00", "12:00"),
        ];

        assert!(detect_conflicts(&entries).is_empty());
    }

    #[test]
    fn back_to_back_entries_do_not_clash() {
        let entries = vec![
            entry("1", "A", Weekday::Wednesday, "09:00", "10:30"),
            entry("2", "B", Weekday::Wednesday, "10:30", "12:00"),
        ];

        assert!(detect_conflicts(&entries).is_empty());
    }

    #[test]
    fn one_minute_overlap_clashes() {
        let entries = vec![
            entry("1", "A", Weekday::Wednesday, "09:00", "10:31"),
            entry("2", "B", Weekday::Wednesday, "10:30", "12:00"),
        ];

        let conflicts = detect_conflicts(&entries);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id.as_str(), "c-1-2");
    }

    #[test]
    fn mutual_overlaps_are_reported_pairwise() {
        let entries = vec![
            entry("a", "A", Weekday::Thursday, "09:00", "11:00"),
            entry("b", "B", Weekday::Thursday, "09:30", "11:30"),
            entry("c", "C", Weekday::Thursday, "10:00", "12:00"),
        ];

        let ids = detect_conflicts(&entries)
            .into_iter()
            .map(|conflict| conflict.id.to_string())
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["c-a-b", "c-a-c", "c-b-c"]);
    }

    #[test]
    fn reversed_input_flags_same_pairs() {
        let entries = vec![
            entry("1", "A", Weekday::Monday, "09:00", "10:00"),
            entry("2", "B", Weekday::Monday, "09:30", "11:00"),
            entry("3", "C", Weekday::Tuesday, "09:00", "10:00"),
            entry("4", "D", Weekday::Monday, "10:45", "12:00"),
            entry("5", "E", Weekday::Tuesday, "09:59", "10:01"),
        ];
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = detect_conflicts(&entries);
        let backward = detect_conflicts(&reversed);

        assert_eq!(pair_set(&forward), pair_set(&backward));
        assert_eq!(forward.len(), 3);
        assert!(backward.iter().any(|conflict| conflict.id.as_str() == "c-2-1"));
        assert!(backward
            .iter()
            .any(|conflict| conflict.message == "B overlaps with A on Mondays."));
    }

    #[test]
    fn repeated_detection_is_identical() {
        let entries = vec![
            entry("1", "A", Weekday::Friday, "09:00", "10:00"),
            entry("2", "B", Weekday::Friday, "09:30", "11:00"),
            entry("3", "C", Weekday::Friday, "10:30", "11:30"),
        ];

        let detector = ConflictDetector::new();
        assert_eq!(detector.detect(&entries), detector.detect(&entries));
    }

    #[test]
    fn disjoint_entries_produce_nothing() {
        let entries = vec![
            entry("1", "A", Weekday::Monday, "08:00", "09:00"),
            entry("2", "B", Weekday::Monday, "09:00", "10:00"),
            entry("3", "C", Weekday::Monday, "10:00", "11:00"),
            entry("4", "D", Weekday::Tuesday, "08:00", "09:00"),
            entry("5", "E", Weekday::Wednesday, "08:00", "09:00"),
        ];

        assert!(detect_conflicts(&entries).is_empty());
    }

    #[test]
    fn empty_and_single_inputs_produce_nothing() {
        assert!(detect_conflicts(&[]).is_empty());
        let single = [entry("1", "A", Weekday::Monday, "08:00", "09:00")];
        assert!(detect_conflicts(&single).is_empty());
    }

    #[test]
    fn duplicate_entries_are_compared_normally() {
        let lecture = entry("1", "A", Weekday::Monday, "08:00", "09:00");
        let conflicts = detect_conflicts(&[lecture.clone(), lecture]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id.as_str(), "c-1-1");
    }

    #[test]
    fn inverted_entry_is_compared_as_is() {
        // 12:00 -> 10:00 never satisfies start < other end && other start < end
        // against a 10:30-11:00 class, so no clash is reported.
        let entries = vec![
            entry("1", "Inverted", Weekday::Monday, "12:00", "10:00"),
            entry("2", "B", Weekday::Monday, "10:30", "11:00"),
        ];
        assert!(detect_conflicts(&entries).is_empty());
    }

    #[test]
    fn custom_label_is_stamped() {
        let entries = vec![
            entry("1", "A", Weekday::Monday, "08:00", "09:00"),
            entry("2", "B", Weekday::Monday, "08:30", "09:30"),
        ];
        let conflicts = ConflictDetector::with_label("2026-10-19T08:00:00Z").detect(&entries);
        assert_eq!(conflicts[0].detected_at, "2026-10-19T08:00:00Z");
    }

    #[test]
    fn intervals_overlap_is_half_open() {
        assert!(intervals_overlap(600, 720, 630, 720));
        assert!(!intervals_overlap(540, 630, 630, 720));
        assert!(intervals_overlap(540, 631, 630, 720));
    }
}
