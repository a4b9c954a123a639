use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] timesmart_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to read timetable at {}: {source}", path.display())]
    ReadTimetable { path: PathBuf, source: io::Error },
    #[error("Failed to parse timetable at {}: {source}", path.display())]
    ParseTimetable {
        path: PathBuf,
        source: timesmart_core::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(
        "No timetable configured. Pass --file, set TIMESMART_TIMETABLE, or run `timesmart config init --timetable <PATH>`."
    )]
    NoTimetable,
    #[error("No current user configured. Pass --user, set TIMESMART_USER, or run `timesmart config init --default-user <EMAIL>`.")]
    NoUser,
}
