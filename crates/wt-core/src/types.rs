//! Value types shared by the parser and the calculator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Validation errors for configured values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The hour was outside 0..=23.
    #[error("hour must be between 0 and 23, got {value}")]
    HourOutOfRange { value: u32 },

    /// The minute was outside 0..=59.
    #[error("minute must be between 0 and 59, got {value}")]
    MinuteOutOfRange { value: u32 },

    /// The string was not of the form `H:MM`.
    #[error("invalid clock time {value:?}, expected H:MM (e.g. 8:30)")]
    Malformed { value: String },
}

/// A wall-clock time with validated components.
///
/// Used for configured values such as the default start time, where a typo
/// should be reported rather than silently reinterpreted. User input goes
/// through [`crate::normalize`] instead, which never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// 8:30, the start time assumed when none can be read.
    pub const DEFAULT_START: Self = Self {
        hour: 8,
        minute: 30,
    };

    /// Creates a clock time after validation.
    pub const fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { value: hour });
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { value: minute });
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::DEFAULT_START
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::Malformed {
            value: s.to_string(),
        };
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour = hour.parse().map_err(|_| malformed())?;
        let minute = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A normalized time of day anchored to a calendar date.
///
/// Seconds are always zero. The hour and minute are kept exactly as parsed and
/// are not clamped: `9:90` is a valid value and behaves like `10:30` in
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    date: NaiveDate,
    hour: i64,
    minute: i64,
}

impl TimeOfDay {
    #[must_use]
    pub const fn new(date: NaiveDate, hour: i64, minute: i64) -> Self {
        Self { date, hour, minute }
    }

    /// Anchors a validated clock time to `date`.
    #[must_use]
    pub fn at(date: NaiveDate, time: ClockTime) -> Self {
        Self::new(date, i64::from(time.hour), i64::from(time.minute))
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn hour(self) -> i64 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> i64 {
        self.minute
    }

    /// Offset from midnight of [`Self::date`] in minutes.
    #[must_use]
    pub const fn minutes_from_midnight(self) -> i64 {
        self.hour
            .saturating_mul(MINUTES_PER_HOUR)
            .saturating_add(self.minute)
    }

    /// Signed number of minutes from `earlier` to `self`.
    #[must_use]
    pub fn minutes_since(self, earlier: Self) -> i64 {
        let days = self.date.signed_duration_since(earlier.date).num_days();
        days.saturating_mul(MINUTES_PER_DAY)
            .saturating_add(self.minutes_from_midnight())
            .saturating_sub(earlier.minutes_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Break time subtracted from the elapsed time of a workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PauseMinutes(i64);

impl PauseMinutes {
    /// One hour, the pause assumed when none can be read.
    pub const DEFAULT: Self = Self(60);

    #[must_use]
    pub const fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Parses a pause typed by the user, falling back to `default`.
    #[must_use]
    pub fn parse_or(raw: &str, default: Self) -> Self {
        raw.parse().map_or_else(
            |_| {
                tracing::debug!(raw, fallback = default.0, "unparsable pause, using default");
                default
            },
            Self,
        )
    }

    #[must_use]
    pub const fn minutes(self) -> i64 {
        self.0
    }
}

impl Default for PauseMinutes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PauseMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
