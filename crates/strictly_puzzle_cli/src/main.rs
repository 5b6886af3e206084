//! Strictly Puzzle - Unified CLI
//!
//! Sliding-tile puzzle with saved games and an interactive mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use std::path::Path;
use strictly_puzzle::Grid;
use strictly_puzzle_cli::{PlaySession, PuzzleConfig, load, new_puzzle, puzzle_for_play, save};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PuzzleConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::New { size, solved, seed } => {
            let config = config.with_overrides(size, cli.state, seed);
            run_new(&config, solved)
        }
        Command::Show => {
            let config = config.with_overrides(None, cli.state, None);
            run_show(config.state_file())
        }
        Command::Move { x, y } => {
            let config = config.with_overrides(None, cli.state, None);
            run_move(config.state_file(), x, y)
        }
        Command::Play { size, seed } => {
            let config = config.with_overrides(size, cli.state, seed);
            run_play(&config, size, seed)
        }
    }
}

/// Create and save a new puzzle
#[instrument(skip(config), fields(size = config.size()))]
fn run_new(config: &PuzzleConfig, solved: bool) -> Result<()> {
    let grid = new_puzzle(*config.size(), solved, *config.seed())?;
    save(&grid, config.state_file())?;
    info!(path = %config.state_file().display(), "New puzzle saved");
    println!("{}", grid);
    Ok(())
}

/// Print the saved puzzle
#[instrument]
fn run_show(state_file: &Path) -> Result<()> {
    let grid = load(state_file)?;
    println!("{}", grid);
    Ok(())
}

/// Apply a single move to the saved puzzle
#[instrument]
fn run_move(state_file: &Path, x: i64, y: i64) -> Result<()> {
    let mut grid = load(state_file)?;
    let piece = grid
        .piece_at_coordinates(x, y)
        .with_context(|| format!("No cell at ({},{})", x, y))?;
    let Some(piece) = piece else {
        bail!("({},{}) is the empty cell", x, y);
    };

    if !grid.do_move_to_empty(&piece) {
        bail!(
            "{} is not next to the empty cell {}",
            piece.current_position(),
            grid.empty_position()
        );
    }

    save(&grid, state_file)?;
    println!("{}", grid);
    Ok(())
}

/// Play interactively until the player quits or input ends
#[instrument(skip(config))]
fn run_play(config: &PuzzleConfig, size: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut session = PlaySession::new(puzzle_for_play(config, size, seed)?);
    let mut stdout = std::io::stdout();
    session
        .run(std::io::stdin().lock(), &mut stdout)
        .context("Failed to read input")?;

    let moves = session.moves();
    let grid: Grid = session.into_grid();
    if let Err(e) = save(&grid, config.state_file()) {
        warn!(error = %e, "Could not save puzzle");
        return Err(e.into());
    }
    info!(moves, "Session ended");
    writeln!(stdout, "Saved after {} moves to {}", moves, config.state_file().display())?;
    Ok(())
}
