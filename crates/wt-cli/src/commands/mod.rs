//! CLI command implementations.

pub mod calculate;
