//! Contract-based validation for puzzle moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveRejection};
use crate::grid::Grid;
use crate::invariants::{InvariantSet, PuzzleInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The destination must lie inside the grid.
pub struct DestinationInBounds;

impl DestinationInBounds {
    /// Validates the destination bounds.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &Grid) -> Result<(), MoveRejection> {
        if grid.contains(mov.destination) {
            Ok(())
        } else {
            Err(MoveRejection::DestinationOutOfBounds(mov.destination))
        }
    }
}

/// Precondition: The destination must be the empty cell.
pub struct DestinationIsEmpty;

impl DestinationIsEmpty {
    /// Validates that the destination is free.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &Grid) -> Result<(), MoveRejection> {
        if mov.destination == grid.empty_position() {
            Ok(())
        } else {
            Err(MoveRejection::DestinationNotEmpty(mov.destination))
        }
    }
}

/// Precondition: The piece must be on the grid exactly as the caller describes it.
///
/// Lookups hand out copies; a copy taken before another move is stale.
pub struct PieceIsOnGrid;

impl PieceIsOnGrid {
    /// Validates the piece against the grid's own record.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &Grid) -> Result<(), MoveRejection> {
        match grid.piece_at(mov.piece.current_position()) {
            Ok(Some(held)) if held == mov.piece => Ok(()),
            _ => Err(MoveRejection::StalePiece(mov.piece)),
        }
    }
}

/// Precondition: The piece must be one orthogonal step from the destination.
pub struct PieceIsAdjacent;

impl PieceIsAdjacent {
    /// Validates the Manhattan distance.
    #[instrument(skip(_grid))]
    pub fn check(mov: &Move, _grid: &Grid) -> Result<(), MoveRejection> {
        match mov.distance() {
            1 => Ok(()),
            distance => Err(MoveRejection::NotAdjacent(distance)),
        }
    }
}

/// Composite precondition for sliding into the empty cell: the piece is on
/// the grid and next to the destination.
pub struct AdjacentMove;

impl AdjacentMove {
    /// Validates the piece and its distance to the destination.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &Grid) -> Result<(), MoveRejection> {
        PieceIsOnGrid::check(mov, grid)?;
        PieceIsAdjacent::check(mov, grid)?;
        Ok(())
    }
}

/// Composite precondition: the destination is the in-bounds empty cell and
/// the piece is next to it.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &Grid) -> Result<(), MoveRejection> {
        DestinationInBounds::check(mov, grid)?;
        DestinationIsEmpty::check(mov, grid)?;
        AdjacentMove::check(mov, grid)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Destination is inside the grid and is the empty cell
/// - The piece is on the grid where it claims to be
/// - The piece is one step from the destination
///
/// Postconditions:
/// - All puzzle invariants hold
/// - The set of pieces is unchanged
pub struct MoveContract;

impl Contract<Grid, Move> for MoveContract {
    fn pre(grid: &Grid, action: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(action, grid)
    }

    fn post(before: &Grid, after: &Grid) -> Result<(), MoveRejection> {
        PuzzleInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveRejection::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let mut homes_before: Vec<_> = before.pieces().map(|p| p.home()).collect();
        let mut homes_after: Vec<_> = after.pieces().map(|p| p.home()).collect();
        homes_before.sort();
        homes_after.sort();
        if homes_before != homes_after {
            warn!("Move changed the set of pieces");
            return Err(MoveRejection::InvariantViolation(
                "Postcondition failed: the set of pieces changed".to_string(),
            ));
        }

        Ok(())
    }
}
