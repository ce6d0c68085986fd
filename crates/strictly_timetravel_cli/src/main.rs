//! Strictly Timetravel - terminal front end
//!
//! Interactive play on stdin/stdout, or a one-shot replay of a move list.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_timetravel_cli::{AppConfig, Cli, Command, OutputFormat, Session, render_frame};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay {
            moves,
            jump,
            format,
        } => run_replay(config, moves, jump, format),
    }
}

/// Logs go to stderr so frames on stdout stay clean.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive session
#[instrument(skip(config))]
fn run_play(config: AppConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(config.display().clone());
    session.run(io::stdin().lock(), io::stdout().lock())
}

/// Replay a move list and print the final (or jumped-to) frame
#[instrument(skip(config))]
fn run_replay(
    config: AppConfig,
    moves: Vec<usize>,
    jump: Option<usize>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = match format {
        Some(format) => config.with_format(format),
        None => config,
    };

    let session = Session::replay(&moves, jump, config.display().clone())?;
    println!("{}", render_frame(session.engine(), config.display())?);
    Ok(())
}
