//! Delve CLI - play or generate terminal dungeons.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Delve - a turn-based dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game
    Play {
        /// Dungeon width in cells (prompted when omitted; below 8 falls back to 16x16)
        #[arg(long)]
        width: Option<u16>,

        /// Dungeon height in cells (prompted when omitted; below 8 falls back to 16x16)
        #[arg(long)]
        height: Option<u16>,

        /// Random seed (default: from system time)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a dungeon and print it without playing
    Generate {
        /// Dungeon width in cells
        #[arg(long, default_value = "16")]
        width: u16,

        /// Dungeon height in cells
        #[arg(long, default_value = "16")]
        height: u16,

        /// Random seed (default: from system time)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            width,
            height,
            seed,
        } => cli::play::execute(width, height, seed),

        Commands::Generate {
            width,
            height,
            seed,
            format,
        } => cli::generate::execute(width, height, seed, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
