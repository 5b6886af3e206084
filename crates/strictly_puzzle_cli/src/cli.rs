//! Command-line interface for strictly_puzzle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Puzzle - sliding-tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "puzzle")]
#[command(about = "Sliding-tile puzzle with saved games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "strictly_puzzle.toml")]
    pub config: PathBuf,

    /// Save file (overrides config)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new puzzle and save it
    New {
        /// Side length (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Start from the solved arrangement instead of shuffling
        #[arg(long)]
        solved: bool,

        /// Seed for the shuffle (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the saved puzzle
    Show,

    /// Slide the piece at X,Y into the empty cell and save
    Move {
        /// Column of the piece
        #[arg(allow_hyphen_values = true)]
        x: i64,

        /// Row of the piece
        #[arg(allow_hyphen_values = true)]
        y: i64,
    },

    /// Play interactively, reading moves from stdin
    Play {
        /// Start a fresh shuffled puzzle of this size instead of loading
        #[arg(short, long)]
        size: Option<usize>,

        /// Start a fresh puzzle shuffled with this seed instead of loading
        #[arg(long)]
        seed: Option<u64>,
    },
}
