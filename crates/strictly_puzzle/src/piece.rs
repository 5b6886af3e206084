//! Puzzle tiles.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A tile on the puzzle grid.
///
/// A piece is identified by its home position, the slot it occupies in the
/// solved arrangement. Its current position changes as it slides around.
/// Pieces know nothing about the grid; adjacency and occupancy are the
/// grid's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    home: Position,
    position: Position,
}

impl Piece {
    /// Creates a piece at home at `(x, y)`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self::at(Position::new(x, y))
    }

    /// Creates a piece at home at `position`.
    pub const fn at(position: Position) -> Self {
        Self {
            home: position,
            position,
        }
    }

    /// Creates a piece that has already moved away from home.
    pub const fn with_home(home: Position, position: Position) -> Self {
        Self { home, position }
    }

    /// The slot this piece occupies when the puzzle is solved.
    pub const fn home(&self) -> Position {
        self.home
    }

    /// Where the piece currently sits.
    pub const fn current_position(&self) -> Position {
        self.position
    }

    /// Overwrites the current position.
    ///
    /// No validation happens here; on a copy handed out by the grid this only
    /// changes the copy.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Tile number shown to players: the home slot's row-major index, plus one.
    pub const fn label(&self, size: usize) -> usize {
        self.home.to_index(size) + 1
    }
}

impl From<Position> for Piece {
    fn from(position: Position) -> Self {
        Self::at(position)
    }
}
