//! Workday arithmetic.
//!
//! Two calculations are supported: when the daily target is reached for a
//! given start and pause, and how much was worked between a start and an end
//! once the pause is taken off. All arithmetic is done in whole minutes and
//! saturates instead of overflowing.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};

use crate::types::{ClockTime, MINUTES_PER_DAY, MINUTES_PER_HOUR, PauseMinutes, TimeOfDay};

/// Worked time is reported in steps of this many minutes.
pub const QUARTER_HOUR_MINUTES: i64 = 15;

/// The fixed values a calculation falls back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayRules {
    /// Daily target used for the end time.
    /// Default: 8.
    pub hours_per_day: i64,

    /// Start time used when none can be read.
    /// Default: 8:30.
    pub default_start: ClockTime,

    /// Pause used when none can be read.
    /// Default: 60 minutes.
    pub default_pause: PauseMinutes,
}

impl Default for WorkdayRules {
    fn default() -> Self {
        Self {
            hours_per_day: 8,
            default_start: ClockTime::DEFAULT_START,
            default_pause: PauseMinutes::DEFAULT,
        }
    }
}

/// The clock time at which the daily target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTime {
    /// Wall-clock time, wrapped at midnight.
    pub time: NaiveTime,
    /// Days between the start date and the end (0 on the same day).
    pub days_later: i64,
}

impl EndTime {
    /// The end as a time of day on `date`, ignoring [`Self::days_later`].
    #[must_use]
    pub fn on(self, date: NaiveDate) -> TimeOfDay {
        TimeOfDay::new(
            date,
            i64::from(self.time.hour()),
            i64::from(self.time.minute()),
        )
    }
}

impl fmt::Display for EndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M"))
    }
}

/// Net worked time, already rounded to the quarter hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkedDuration {
    minutes: i64,
}

impl WorkedDuration {
    #[must_use]
    pub const fn minutes(self) -> i64 {
        self.minutes
    }
}

/// Formats as `H:MM`. The hour is floored, so the minute is always in
/// `0..60` and -75 minutes reads `-2:45`.
impl fmt::Display for WorkedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.minutes.div_euclid(MINUTES_PER_HOUR);
        let minutes = self.minutes.rem_euclid(MINUTES_PER_HOUR);
        write!(f, "{hours}:{minutes:02}")
    }
}

/// The value handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkResult {
    EndTime(EndTime),
    WorkedDuration(WorkedDuration),
}

impl fmt::Display for WorkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndTime(end) => fmt::Display::fmt(end, f),
            Self::WorkedDuration(worked) => fmt::Display::fmt(worked, f),
        }
    }
}

/// Computes when `hours_per_day` hours plus the pause have passed since `start`.
pub fn compute_end_time(start: TimeOfDay, pause: PauseMinutes, hours_per_day: i64) -> EndTime {
    let total = start
        .minutes_from_midnight()
        .saturating_add(hours_per_day.saturating_mul(MINUTES_PER_HOUR))
        .saturating_add(pause.minutes());

    let end = EndTime {
        time: NaiveTime::MIN + TimeDelta::minutes(total.rem_euclid(MINUTES_PER_DAY)),
        days_later: total.div_euclid(MINUTES_PER_DAY),
    };
    tracing::debug!(%start, %pause, hours_per_day, %end, days_later = end.days_later, "computed end time");
    end
}

/// Computes the time worked between `start` and `end` minus the pause,
/// rounded to the nearest quarter hour.
///
/// An `end` before `start` yields a negative duration.
pub fn compute_worked_duration(
    start: TimeOfDay,
    pause: PauseMinutes,
    end: TimeOfDay,
) -> WorkedDuration {
    let elapsed = end.minutes_since(start);
    let worked = elapsed.saturating_sub(pause.minutes());
    let rounded = round_to_quarter_hour(worked);
    tracing::debug!(%start, %end, %pause, elapsed, worked, rounded, "computed worked duration");
    WorkedDuration { minutes: rounded }
}

/// Rounds to the nearest multiple of 15 minutes, halves away from zero.
pub const fn round_to_quarter_hour(minutes: i64) -> i64 {
    let remainder = minutes % QUARTER_HOUR_MINUTES;
    let truncated = minutes - remainder;
    if remainder.abs() * 2 >= QUARTER_HOUR_MINUTES {
        truncated.saturating_add(QUARTER_HOUR_MINUTES * minutes.signum())
    } else {
        truncated
    }
}
