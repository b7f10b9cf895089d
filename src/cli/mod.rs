//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `ledgers` - Fetch pages of ledgers
//! - `ledger` - Fetch one ledger by sequence
//! - `stream` - Stream ledgers as they close

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
use runner::render;
