//! Strictly Puzzle front end.
//!
//! The collaborators the puzzle model leaves out: configuration, save files
//! and a text session. The `puzzle` binary wires them to a CLI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod store;

pub use config::{ConfigError, PuzzleConfig};
pub use session::{Command, PlaySession, Reply};
pub use store::{StoreError, load, save};

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_puzzle::{Grid, InvalidArgument};
use tracing::{debug, instrument};

/// Creates a new puzzle: solved, or shuffled with an optional seed.
#[instrument]
pub fn new_puzzle(size: usize, solved: bool, seed: Option<u64>) -> Result<Grid, InvalidArgument> {
    match (solved, seed) {
        (true, _) => Grid::solved(size),
        (false, Some(seed)) => Grid::shuffled_with(size, &mut StdRng::seed_from_u64(seed)),
        (false, None) => Grid::shuffled(size),
    }
}

/// The puzzle `play` starts from.
///
/// `config` already carries the command-line overrides; `size` and `seed` are
/// the raw flags. Passing either one asks for a fresh shuffle, as does a
/// missing save file. Otherwise the saved game is resumed.
#[instrument(skip(config), fields(path = %config.state_file().display()))]
pub fn puzzle_for_play(
    config: &PuzzleConfig,
    size: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<Grid> {
    let fresh = size.is_some() || seed.is_some();
    if fresh || !config.state_file().exists() {
        debug!(fresh, "Starting a new puzzle");
        Ok(new_puzzle(*config.size(), false, *config.seed())?)
    } else {
        load(config.state_file()).context("Failed to resume saved puzzle")
    }
}
