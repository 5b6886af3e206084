//! Argument validation errors.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with an argument.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidArgumentKind {
    /// Grids need at least two cells per side.
    #[display("Grid size must be at least 2, got {}", _0)]
    SizeTooSmall(usize),

    /// The grid would have more cells than can be addressed.
    #[display("Grid size {} is too large", _0)]
    SizeTooLarge(usize),

    /// Coordinates must be non-negative.
    #[display("Coordinates ({}, {}) must be non-negative", _0, _1)]
    NegativeCoordinate(i64, i64),

    /// A position lies outside the grid.
    #[display("Position {} is outside a {}x{} grid", position, size, size)]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of the grid.
        size: usize,
    },

    /// The piece count plus the empty cell is not a perfect square.
    #[display("{} pieces cannot fill a square grid with one empty cell", _0)]
    PieceCountNotSquare(usize),

    /// Two pieces claim the same cell, or the same home slot.
    #[display("Position {} is claimed by more than one piece", _0)]
    DuplicatePosition(Position),

    /// A piece's home is not one of the solved tile slots.
    #[display("Home position {} is not a tile slot", _0)]
    UnexpectedHome(Position),

    /// The declared empty cell holds a piece.
    #[display("Empty position {} is occupied by a piece", _0)]
    EmptyCellOccupied(Position),

    /// The declared empty cell lies outside the grid.
    #[display("Empty position {} is outside a {}x{} grid", position, size, size)]
    EmptyOutOfBounds {
        /// The declared empty position.
        position: Position,
        /// Side length of the grid.
        size: usize,
    },
}

/// Invalid argument error with location tracking.
///
/// Raised eagerly, before any state is touched.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid argument: {} at {}:{}", kind, file, line)]
pub struct InvalidArgument {
    /// What was wrong.
    pub kind: InvalidArgumentKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidArgument {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidArgumentKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what was wrong with the argument.
    pub fn kind(&self) -> &InvalidArgumentKind {
        &self.kind
    }
}

impl From<InvalidArgumentKind> for InvalidArgument {
    #[track_caller]
    fn from(kind: InvalidArgumentKind) -> Self {
        Self::new(kind)
    }
}
