//! Error types for timesmart-core

use thiserror::Error;

/// Result type alias using timesmart-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in timesmart-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Time of day not in zero-padded 24-hour `HH:MM` form
    #[error("Malformed time '{0}': expected HH:MM in 24-hour form")]
    MalformedTime(String),

    /// Unknown weekday name
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    /// Entry not found in a timetable
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Entry id already present in a timetable
    #[error("Duplicate entry id: {0}")]
    DuplicateEntry(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
