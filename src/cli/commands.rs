//! CLI commands and argument parsing

use crate::types::Order;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Horizon paginated and streaming client
#[derive(Parser, Debug)]
#[command(name = "horizon-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Horizon server URL (overrides the config file; defaults to testnet)
    #[arg(short = 'u', long, global = true)]
    pub horizon_url: Option<String>,

    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch pages of ledgers
    Ledgers {
        /// Paging token to start from, or "now"
        #[arg(long)]
        cursor: Option<String>,

        /// Sort order (asc or desc)
        #[arg(long)]
        order: Option<Order>,

        /// Records per page
        #[arg(long)]
        limit: Option<u32>,

        /// Number of pages to walk
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Fetch one ledger by sequence
    Ledger {
        /// Ledger sequence
        sequence: u32,
    },

    /// Stream ledgers as they close (Ctrl-C to stop)
    Stream {
        /// Paging token to resume from (default: now)
        #[arg(long)]
        cursor: Option<String>,

        /// Stop after this many ledgers
        #[arg(long)]
        max: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON
    Pretty,
}
