//! The interactive calculation.
//!
//! Asks for start, pause and (in worked-hours mode) end, then prints the result.
//! Every answer that cannot be read falls back to a default so a result is
//! always produced.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDateTime;
use colored::Colorize;
use wt_core::{
    PauseMinutes, TimeOfDay, WorkResult, WorkdayRules, compute_end_time, compute_worked_duration,
    normalize,
};

use crate::prompt::ask;

/// Which result to calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// When will the daily hours be reached?
    EndTime,
    /// How many hours were worked between start and end?
    WorkedHours,
}

/// Runs one calculation, returning the result for the clipboard.
///
/// `now` supplies the date and the time used for an empty start. With
/// `highlight` the worked hours are printed in red.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    writer: &mut W,
    rules: &WorkdayRules,
    mode: Mode,
    now: NaiveDateTime,
    highlight: bool,
) -> Result<WorkResult> {
    writeln!(writer, "Worktime Calculator")?;
    writeln!(
        writer,
        "Note:\tTimes, e.g. 8:30, can be entered with or without the colon."
    )?;
    writeln!(writer, "{}", "-".repeat(50))?;

    let start = match ask(input, writer, "Start Time:\t")? {
        Some(raw) => normalize(&raw, now, rules.default_start),
        None => {
            tracing::debug!(default = %rules.default_start, "no start time, using default");
            TimeOfDay::at(now.date(), rules.default_start)
        }
    };
    let pause = ask(input, writer, "Pause (min):\t")?.map_or(rules.default_pause, |raw| {
        PauseMinutes::parse_or(&raw, rules.default_pause)
    });

    let (result, message) = match mode {
        Mode::EndTime => {
            let end = compute_end_time(start, pause, rules.hours_per_day);
            let message = format!(
                "You will have worked {} hours at:\t{end}",
                rules.hours_per_day
            );
            (WorkResult::EndTime(end), message)
        }
        Mode::WorkedHours => {
            let end = match ask(input, writer, "End Time:\t")? {
                Some(raw) => normalize(&raw, now, rules.default_start),
                None => {
                    tracing::debug!("no end time, using the projected end of the workday");
                    compute_end_time(start, pause, rules.hours_per_day).on(start.date())
                }
            };
            let worked = compute_worked_duration(start, pause, end);
            let shown = if highlight {
                worked.to_string().red().to_string()
            } else {
                worked.to_string()
            };
            (
                WorkResult::WorkedDuration(worked),
                format!("Total working hours:\t{shown}"),
            )
        }
    };

    writeln!(writer)?;
    writeln!(writer, "{message}")?;
    writeln!(writer)?;

    Ok(result)
}
