//! Serializable grid state for persistence collaborators.

use crate::piece::Piece;
use crate::position::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Every piece of a grid plus its empty cell.
///
/// Produced by [`Grid::snapshot`](crate::Grid::snapshot) and turned back into
/// a grid by [`Grid::from_snapshot`](crate::Grid::from_snapshot), which
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GridSnapshot {
    /// Pieces with their home and current positions.
    pieces: Vec<Piece>,
    /// The empty cell.
    empty: Position,
}

impl GridSnapshot {
    /// Splits the snapshot into its pieces and empty cell.
    pub fn into_parts(self) -> (Vec<Piece>, Position) {
        (self.pieces, self.empty)
    }
}
