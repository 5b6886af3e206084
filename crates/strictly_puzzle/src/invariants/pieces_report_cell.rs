//! Piece/cell agreement invariant.

use super::Invariant;
use crate::{Cell, Grid, Position};

/// Invariant: every piece reports the cell it is stored in as its position.
///
/// The grid's placement and the pieces' own positions move in lockstep.
pub struct PiecesReportCellInvariant;

impl Invariant<Grid> for PiecesReportCellInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.cells().iter().enumerate().all(|(idx, cell)| match cell {
            Cell::Empty => true,
            Cell::Occupied(piece) => {
                piece.current_position() == Position::from_index(idx, grid.size())
            }
        })
    }

    fn description() -> &'static str {
        "Every piece reports the cell it occupies"
    }
}
