use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::calculate;
use wt_cli::{Cli, Config, clipboard};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with the prompts
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_or_default(cli.config.as_deref());
    tracing::debug!(?config, "loaded configuration");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let highlight = output.is_terminal();

    let result = calculate::run(
        &mut input,
        &mut output,
        &config.rules(),
        cli.mode(),
        Local::now().naive_local(),
        highlight,
    )?;

    if cli.no_copy {
        tracing::debug!("clipboard copy disabled");
    } else {
        clipboard::report(&mut output, clipboard::copy_to_system(&result.to_string()))
            .context("failed to write output")?;
    }

    Ok(())
}
