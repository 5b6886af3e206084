//! Fixed piece set invariant: moves relocate pieces, never create or destroy them.

use super::Invariant;
use crate::{Grid, Position};
use std::collections::HashSet;

/// Invariant: the grid holds `size² - 1` pieces whose homes are exactly the
/// tile slots of the solved arrangement.
///
/// Every slot but the bottom-right corner is some piece's home, once.
pub struct FixedPieceSetInvariant;

impl Invariant<Grid> for FixedPieceSetInvariant {
    fn holds(grid: &Grid) -> bool {
        let size = grid.size();
        let expected = size * size - 1;

        let homes: HashSet<Position> = grid.pieces().map(|piece| piece.home()).collect();
        let count = grid.pieces().count();

        count == expected
            && homes.len() == expected
            && homes.iter().all(|home| home.to_index(size) < expected && home.within(size))
    }

    fn description() -> &'static str {
        "The grid holds every tile of the solved puzzle exactly once"
    }
}
