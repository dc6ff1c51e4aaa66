//! Lenient parsing of user-typed clock times.
//!
//! Input such as `830`, `8:3`, `14` or `1430` is accepted. Nothing is ever
//! rejected: any part that cannot be read falls back to a default so the user
//! is never blocked.
//!
//! # Algorithm Summary
//!
//! 1. Empty input means "now", truncated to the minute
//! 2. Input without a `:` is split into hour and minute digits by a
//!    [`Reshape`] rule chosen from its length and leading digit
//! 3. The hour falls back to the default start hour, the minute to 0
//! 4. A minute below 10 is a single-digit fragment and is multiplied by 10

use chrono::{NaiveDateTime, Timelike};

use crate::types::{ClockTime, TimeOfDay};

/// Separator between hour and minute.
pub const SEPARATOR: char = ':';

/// How a separator-less input is split into hour and minute digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reshape {
    /// All characters are the hour (`4` → `4:`).
    HourOnly,
    /// The first `n` characters are the hour, the rest the minute
    /// (`830` → `8:30`).
    SplitAt(usize),
    /// Use the default start time (two characters that are not a number).
    DefaultStart,
}

impl Reshape {
    /// Picks the rule for an input that contains no separator.
    ///
    /// | length | condition          | rule            |
    /// |--------|--------------------|-----------------|
    /// | 0, 1   |                    | `HourOnly`      |
    /// | 2      | not an integer     | `DefaultStart`  |
    /// | 2      | integer <= 23      | `HourOnly`      |
    /// | 2      | integer > 23       | `SplitAt(1)`    |
    /// | 3      | starts with 1 or 2 | `SplitAt(2)`    |
    /// | 3      | otherwise          | `SplitAt(1)`    |
    /// | n >= 4 |                    | `SplitAt(n-2)`  |
    ///
    /// Lengths count characters, not bytes.
    pub fn for_digits(raw: &str) -> Self {
        match raw.chars().count() {
            0 | 1 => Self::HourOnly,
            2 => match raw.parse::<i64>() {
                Err(_) => Self::DefaultStart,
                Ok(value) if value <= 23 => Self::HourOnly,
                // Cannot be an hour, so it must be one hour and one minute digit
                Ok(_) => Self::SplitAt(1),
            },
            3 if raw.starts_with(['1', '2']) => Self::SplitAt(2),
            3 => Self::SplitAt(1),
            n => Self::SplitAt(n - 2),
        }
    }
}

/// Normalizes a raw user-typed string into a time of day on `now`'s date.
///
/// Never fails. `default_start` is used when the input carries no usable
/// time at all (`:` or two non-digit characters) and supplies the hour when
/// only the hour part is unreadable.
pub fn normalize(raw: &str, now: NaiveDateTime, default_start: ClockTime) -> TimeOfDay {
    let date = now.date();

    if raw.is_empty() {
        return TimeOfDay::new(date, i64::from(now.hour()), i64::from(now.minute()));
    }
    if raw == ":" {
        return TimeOfDay::at(date, default_start);
    }

    let (hour_part, minute_part) = if raw.contains(SEPARATOR) {
        let mut fields = raw.split(SEPARATOR);
        (
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
        )
    } else {
        match Reshape::for_digits(raw) {
            Reshape::HourOnly => (raw, ""),
            Reshape::SplitAt(n) => split_at_char(raw, n),
            Reshape::DefaultStart => {
                tracing::debug!(raw, "unreadable two-character time, using default start");
                return TimeOfDay::at(date, default_start);
            }
        }
    };

    let (hour, minute) = resolve(hour_part, minute_part, default_start);
    tracing::trace!(raw, hour, minute, "normalized time");
    TimeOfDay::new(date, hour, minute)
}

/// Parses hour and minute fragments, applying the fallbacks and the
/// single-digit minute rule.
fn resolve(hour_part: &str, minute_part: &str, default_start: ClockTime) -> (i64, i64) {
    let hour = hour_part.parse::<i64>().unwrap_or_else(|_| {
        tracing::debug!(hour_part, "unparsable hour, using default start hour");
        i64::from(default_start.hour())
    });
    let mut minute = minute_part.parse::<i64>().unwrap_or(0);
    if minute < 10 {
        minute = minute.saturating_mul(10);
    }
    (hour, minute)
}

/// Splits after the `n`th character.
fn split_at_char(raw: &str, n: usize) -> (&str, &str) {
    let index = raw.char_indices().nth(n).map_or(raw.len(), |(i, _)| i);
    raw.split_at(index)
}
