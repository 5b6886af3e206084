//! JSON save files for puzzle state.

use derive_more::{Display, Error};
use std::path::Path;
use strictly_puzzle::{Grid, GridSnapshot};
use tracing::{debug, info, instrument};

/// Writes the grid to `path` as a JSON snapshot.
#[instrument(skip(grid, path), fields(path = %path.as_ref().display(), size = grid.size()))]
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(&grid.snapshot())
        .map_err(|e| StoreError::new(format!("Failed to encode puzzle: {}", e)))?;
    std::fs::write(path.as_ref(), json)
        .map_err(|e| StoreError::new(format!("Failed to write save file: {}", e)))?;
    info!("Puzzle saved");
    Ok(())
}

/// Reads a grid saved by [`save`].
///
/// The snapshot is validated; a hand-edited file that does not describe a
/// consistent puzzle is rejected.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Grid, StoreError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| StoreError::new(format!("Failed to read save file: {}", e)))?;
    let snapshot: GridSnapshot = serde_json::from_str(&content)
        .map_err(|e| StoreError::new(format!("Failed to decode puzzle: {}", e)))?;
    let grid = Grid::from_snapshot(snapshot)
        .map_err(|e| StoreError::new(format!("Save file is inconsistent: {}", e.kind())))?;
    debug!(size = grid.size(), "Puzzle loaded");
    Ok(grid)
}

/// Save file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
