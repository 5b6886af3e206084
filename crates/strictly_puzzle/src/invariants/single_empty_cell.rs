//! Single empty cell invariant: one gap, and the grid knows where it is.

use super::Invariant;
use crate::{Cell, Grid};

/// Invariant: exactly one cell is empty and it is the cached empty position.
pub struct SingleEmptyCellInvariant;

impl Invariant<Grid> for SingleEmptyCellInvariant {
    fn holds(grid: &Grid) -> bool {
        let mut empties = grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| idx);

        match (empties.next(), empties.next()) {
            (Some(idx), None) => grid.contains(grid.empty_position())
                && idx == grid.empty_position().to_index(grid.size()),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Exactly one cell is empty and it matches the empty position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, Position};

    #[test]
    fn test_solved_grid_holds() {
        let grid = Grid::solved(3).unwrap();
        assert!(SingleEmptyCellInvariant::holds(&grid));
    }

    #[test]
    fn test_stale_empty_position_violates() {
        let mut grid = Grid::solved(3).unwrap();
        grid.empty = Position::new(0, 0);
        assert!(!SingleEmptyCellInvariant::holds(&grid));
    }

    #[test]
    fn test_no_empty_cell_violates() {
        let mut grid = Grid::solved(2).unwrap();
        grid.cells[3] = Cell::Occupied(Piece::new(1, 1));
        assert!(!SingleEmptyCellInvariant::holds(&grid));
    }

    #[test]
    fn test_two_empty_cells_violate() {
        let mut grid = Grid::solved(2).unwrap();
        grid.cells[0] = Cell::Empty;
        assert!(!SingleEmptyCellInvariant::holds(&grid));
    }
}
