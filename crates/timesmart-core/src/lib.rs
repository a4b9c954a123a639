//! timesmart-core - Core library for TimeSmart
//!
//! This crate contains the timetable models, the clash detector and the
//! report helpers used by every TimeSmart interface.
//!
//! Clash detection is a pure function of an entry snapshot: callers own
//! their entries (see [`Timetable`]) and rerun detection after each change.

pub mod conflict;
pub mod error;
pub mod models;
pub mod report;
pub mod sample;
pub mod timetable;
pub mod util;

pub use conflict::{detect_conflicts, ConflictDetector, ConflictSummary};
pub use error::{Error, Result};
pub use models::{Conflict, ConflictKind, Entry, EntryId, EntryKind, TimeOfDay, Weekday};
pub use timetable::Timetable;
