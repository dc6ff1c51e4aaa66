//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::calculate::Mode;

/// Worktime calculator.
///
/// Asks for a start time, a pause and an end time and prints the hours worked,
/// rounded to the quarter hour. With `-t` it prints when the daily hours will
/// be reached instead. Times can be typed with or without the colon (830, 8:30).
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Calculate the time at which the daily hours are reached.
    #[arg(short = 't', long = "time")]
    pub end_time: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not copy the result to the clipboard.
    #[arg(long)]
    pub no_copy: bool,
}

impl Cli {
    /// The calculation selected by the flags.
    pub const fn mode(&self) -> Mode {
        if self.end_time {
            Mode::EndTime
        } else {
            Mode::WorkedHours
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_worked_hours() {
        let cli = Cli::try_parse_from(["wt"]).unwrap();
        assert_eq!(cli.mode(), Mode::WorkedHours);
        assert!(!cli.verbose);
        assert!(!cli.no_copy);
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_t_selects_end_time() {
        let cli = Cli::try_parse_from(["wt", "-t"]).unwrap();
        assert_eq!(cli.mode(), Mode::EndTime);
        let cli = Cli::try_parse_from(["wt", "--time"]).unwrap();
        assert_eq!(cli.mode(), Mode::EndTime);
    }

    #[test]
    fn parses_config_and_no_copy() {
        let cli = Cli::try_parse_from(["wt", "-c", "/tmp/wt.toml", "--no-copy", "-v"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wt.toml")));
        assert!(cli.no_copy);
        assert!(cli.verbose);
    }
}
