//! Strictly Puzzle - type-safe sliding-tile puzzle state
//!
//! An N×N generalization of the classic 15-puzzle: numbered tiles on a
//! square grid with exactly one empty cell. Tiles orthogonally adjacent to
//! the empty cell may slide into it.
//!
//! # Architecture
//!
//! - **Position**: immutable, non-negative grid coordinates
//! - **Piece**: a tile labelled by its home slot, tracking where it sits now
//! - **Grid**: owns every piece, validates and applies moves
//! - **Invariants / Contracts**: the guarantees every move must preserve
//!
//! Lookups hand out copies of pieces, never references into the grid, so the
//! only way to change the arrangement is [`Grid::do_move`].
//!
//! # Example
//!
//! ```
//! use strictly_puzzle::{Grid, Position};
//!
//! # fn example() -> Result<(), strictly_puzzle::InvalidArgument> {
//! let mut grid = Grid::solved(3)?;
//! assert_eq!(grid.empty_position(), Position::new(2, 2));
//!
//! let piece = grid.piece_at_coordinates(1, 2)?.expect("occupied");
//! assert!(grid.do_move_to_empty(&piece));
//! assert_eq!(grid.empty_position(), Position::new(1, 2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod cell;
mod contracts;
mod error;
mod grid;
mod invariants;
mod piece;
mod position;
mod snapshot;

// Crate-level exports - Domain values
pub use cell::Cell;
pub use piece::Piece;
pub use position::{Direction, Position};

// Crate-level exports - Grid and actions
pub use action::{Move, MoveRejection};
pub use grid::Grid;
pub use snapshot::GridSnapshot;

// Crate-level exports - Errors
pub use error::{InvalidArgument, InvalidArgumentKind};

// Crate-level exports - Invariants and contracts
pub use contracts::{
    AdjacentMove, Contract, DestinationInBounds, DestinationIsEmpty, LegalMove, MoveContract,
    PieceIsAdjacent, PieceIsOnGrid,
};
pub use invariants::{
    FixedPieceSetInvariant, Invariant, InvariantSet, InvariantViolation,
    PiecesReportCellInvariant, PuzzleInvariants, SingleEmptyCellInvariant,
};
