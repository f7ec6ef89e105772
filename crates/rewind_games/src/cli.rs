//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a replayable, branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a list of moves and print the result
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,4,1)
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// History index to jump to after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the move list latest-first
        #[arg(long)]
        descending: bool,
    },
}
