//! Command-line interface for strictly_timetravel.

use super::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a rewindable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Play a fixed list of cells and print the result
    Replay {
        /// Cells to play in order, e.g. 0,3,1,4,2
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Snapshot to show afterwards
        #[arg(long)]
        jump: Option<usize>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}
