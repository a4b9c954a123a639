//! Wall-clock time-of-day model

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("Invalid regex"));

/// A time of day on the 24-hour clock, minute precision.
///
/// No date, timezone or DST is attached; the value only orders entries within
/// a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build a time from its parts, rejecting values outside `00:00..=23:59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::MalformedTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight: `hour * 60 + minute`.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let captures = TIME_PATTERN
            .captures(s)
            .ok_or_else(|| Error::MalformedTime(s.to_string()))?;
        let hour = captures[1]
            .parse::<u8>()
            .map_err(|_| Error::MalformedTime(s.to_string()))?;
        let minute = captures[2]
            .parse::<u8>()
            .map_err(|_| Error::MalformedTime(s.to_string()))?;
        Self::new(hour, minute).map_err(|_| Error::MalformedTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Convert an `HH:MM` string to minutes since midnight.
///
/// # Examples
///
/// ```
/// use timesmart_core::models::time_to_minutes;
///
/// assert_eq!(time_to_minutes("10:30").unwrap(), 630);
/// assert!(time_to_minutes("9:30").is_err());
/// ```
pub fn time_to_minutes(text: &str) -> Result<u16> {
    Ok(text.parse::<TimeOfDay>()?.minutes_since_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_to_minutes_exact_arithmetic() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("09:05").unwrap(), 545);
        assert_eq!(time_to_minutes("12:00").unwrap(), 720);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_wrong_shape() {
        for input in ["9:30", "0930", "09:3", "09-30", " 09:30", "09:30 ", "", "ab:cd"] {
            assert!(
                matches!(time_to_minutes(input), Err(Error::MalformedTime(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_parts() {
        assert!(time_to_minutes("24:00").is_err());
        assert!(time_to_minutes("12:60").is_err());
        assert!(TimeOfDay::new(24, 0).is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        let time = TimeOfDay::new(8, 5).unwrap();
        assert_eq!(time.to_string(), "08:05");
    }

    #[test]
    fn ordering_follows_clock() {
        let early: TimeOfDay = "08:59".parse().unwrap();
        let late: TimeOfDay = "09:00".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn deserialize_validates_format() {
        let parsed: TimeOfDay = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(parsed.minutes_since_midnight(), 870);
        assert!(serde_json::from_str::<TimeOfDay>("\"2:30pm\"").is_err());
    }
}
