//! Worktime calculator CLI library.
//!
//! This crate provides the interactive front end for `wt-core`.

mod cli;
pub mod clipboard;
pub mod commands;
mod config;
pub mod prompt;

pub use cli::Cli;
pub use config::Config;
