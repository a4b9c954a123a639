//! Data models for TimeSmart

mod conflict;
mod entry;
mod time;
mod weekday;

pub use conflict::{Conflict, ConflictId, ConflictKind};
pub use entry::{Entry, EntryId, EntryKind};
pub use time::{time_to_minutes, TimeOfDay};
pub use weekday::Weekday;
