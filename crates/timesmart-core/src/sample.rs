//! Demo timetable handed to new users

use crate::models::{Entry, EntryKind, TimeOfDay, Weekday};
use crate::timetable::Timetable;
use crate::Result;

/// Five demo classes over Monday and Tuesday.
///
/// Computer Science 101 and Advanced Math overlap on Tuesday, so the sample
/// always contains exactly one clash.
pub fn sample_timetable() -> Result<Timetable> {
    let entries = vec![
        Entry::new(
            "Introduction to Physics",
            Weekday::Monday,
            "09:00".parse::<TimeOfDay>()?,
            "10:30".parse()?,
        )
        .with_id("1")
        .with_room("Room 302")
        .with_instructor("Dr. Smith")
        .with_color("#3B82F6"),
        Entry::new(
            "Web Development",
            Weekday::Monday,
            "11:00".parse()?,
            "13:00".parse()?,
        )
        .with_id("2")
        .with_room("Lab A, Building 2")
        .with_kind(EntryKind::Lab)
        .with_instructor("Prof. X")
        .with_color("#10B981"),
        Entry::new(
            "Database Systems",
            Weekday::Monday,
            "14:00".parse()?,
            "15:30".parse()?,
        )
        .with_id("3")
        .with_room("Room 405")
        .with_color("#8B5CF6"),
        Entry::new(
            "Computer Science 101",
            Weekday::Tuesday,
            "10:00".parse()?,
            "12:00".parse()?,
        )
        .with_id("4")
        .with_room("Room 304")
        .with_instructor("Dr. Brown")
        .with_color("#F59E0B"),
        Entry::new(
            "Advanced Math",
            Weekday::Tuesday,
            "10:30".parse()?,
            "12:00".parse()?,
        )
        .with_id("5")
        .with_room("Hall B")
        .with_instructor("Dr. Taylor")
        .with_color("#EC4899"),
    ];

    Ok(Timetable::from_entries(entries))
}
