//! Grid cells.

use crate::piece::Piece;
use serde::{Deserialize, Serialize};

/// A cell on the puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// The single free cell.
    Empty,
    /// Cell holding a tile.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece in this cell, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }

    /// True for the free cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}
