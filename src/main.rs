//! Canopy CLI - play or replay games of the hex-grid forest game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Canopy - a deterministic rule-chain forest-game bot
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a live game against the judge over stdin/stdout
    Play,

    /// Re-run a captured judge transcript and print every decision
    Replay {
        /// Transcript file (startup block followed by turn blocks)
        #[arg(required = true)]
        transcript: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play => cli::play::execute(),
        Commands::Replay { transcript, format } => cli::replay::execute(transcript, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
