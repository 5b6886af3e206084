//! First-class move actions.
//!
//! A move is a request to slide a piece somewhere. It can be checked against
//! a grid before anything changes, logged, and reasoned about by contracts.

use crate::piece::Piece;
use crate::position::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A request to slide `piece` into `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The piece as the caller last saw it.
    pub piece: Piece,
    /// The cell the piece should slide into.
    pub destination: Position,
}

impl Move {
    /// Manhattan distance between the piece and the destination.
    pub fn distance(&self) -> usize {
        self.piece
            .current_position()
            .manhattan_distance(self.destination)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.piece.current_position(),
            self.destination
        )
    }
}

/// Why a move was refused.
///
/// Refusals are an ordinary part of play, not errors: the public move
/// operations report them as `false` and log the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The destination lies outside the grid.
    #[display("Destination {} is outside the grid", _0)]
    DestinationOutOfBounds(Position),

    /// The destination is not the empty cell.
    #[display("Destination {} is not the empty cell", _0)]
    DestinationNotEmpty(Position),

    /// The grid no longer holds this piece where the caller thinks it is.
    #[display("Piece {:?} is not on the grid where it claims to be", _0)]
    StalePiece(Piece),

    /// The piece is not one orthogonal step from the destination.
    #[display("Piece is {} steps from the destination, not 1", _0)]
    NotAdjacent(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveRejection {}
