//! Command-line interface for cnmn.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cnmn - daily word-chain puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "cnmn")]
#[command(about = "Decode six linked words, one miss at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $CNMN_CONFIG, then ./cnmn.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a puzzle, resuming saved progress
    Play {
        /// Feed file; defaults to today's file in the puzzles directory
        puzzle: Option<PathBuf>,

        /// Discard saved progress and start over
        #[arg(long)]
        fresh: bool,
    },

    /// Validate feed files
    Check {
        /// Feed files to validate
        #[arg(required = true)]
        puzzles: Vec<PathBuf>,
    },

    /// Show the results history
    Stats {
        /// Number of recent results to list
        #[arg(long, default_value = "10")]
        recent: u32,
    },
}
