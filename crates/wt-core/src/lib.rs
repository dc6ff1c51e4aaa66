//! Core logic for the worktime calculator.
//!
//! This crate contains the pure parts of the calculator:
//! - Parsing: turning loosely typed times like `830` into a time of day
//! - Calculation: projected end of the workday and net worked time
//!
//! Nothing here reads the clock or performs I/O; the current moment is passed
//! in by the caller.

mod calc;
pub mod parse;
mod types;

pub use calc::{
    EndTime, QUARTER_HOUR_MINUTES, WorkResult, WorkdayRules, WorkedDuration, compute_end_time,
    compute_worked_duration, round_to_quarter_hour,
};
pub use parse::{Reshape, normalize};
pub use types::{ClockTime, MINUTES_PER_DAY, MINUTES_PER_HOUR, PauseMinutes, TimeOfDay, ValidationError};
