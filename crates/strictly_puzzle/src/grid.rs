//! The puzzle grid: construction, lookup and moves.

use crate::action::Move;
use crate::cell::Cell;
use crate::contracts::{AdjacentMove, Contract, MoveContract};
use crate::error::{InvalidArgument, InvalidArgumentKind};
use crate::invariants::{InvariantSet, InvariantViolation, PuzzleInvariants};
use crate::piece::Piece;
use crate::position::{Direction, Position};
use crate::snapshot::GridSnapshot;
use rand::Rng;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// A square sliding-tile puzzle.
///
/// Cells are stored row-major (`y * size + x`). Exactly one cell is empty and
/// `empty` always names it; every occupied cell holds a piece whose current
/// position is that cell. Pieces are created by the constructors and only
/// ever relocated by [`Grid::do_move`] and [`Grid::do_move_to_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) empty: Position,
}

impl Grid {
    // ─────────────────────────────────────────────────────────────
    //  Construction
    // ─────────────────────────────────────────────────────────────

    #[track_caller]
    fn validate_size(size: usize) -> Result<(), InvalidArgument> {
        if size <= 1 {
            return Err(InvalidArgument::new(InvalidArgumentKind::SizeTooSmall(size)));
        }
        // Cell storage must stay within the allocator's isize::MAX byte limit
        let fits = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(InvalidArgument::new(InvalidArgumentKind::SizeTooLarge(size)));
        }
        Ok(())
    }

    /// The `size² - 1` pieces of a puzzle, each at home, in row-major order.
    fn home_pieces(size: usize) -> Vec<Piece> {
        (0..size * size - 1)
            .map(|idx| Piece::at(Position::from_index(idx, size)))
            .collect()
    }

    /// Lays `pieces` out row-major, leaving the bottom-right cell empty.
    ///
    /// Each piece is moved to the slot it lands in.
    fn from_row_major(size: usize, pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for (idx, mut piece) in pieces.into_iter().enumerate() {
            piece.move_to(Position::from_index(idx, size));
            cells.push(Cell::Occupied(piece));
        }
        cells.push(Cell::Empty);

        Self {
            size,
            cells,
            empty: Position::new(size - 1, size - 1),
        }
    }

    /// Creates a solved puzzle.
    ///
    /// Every piece sits at home and the empty cell is the bottom-right corner.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::SizeTooSmall`] if `size` is below 2, or
    /// [`InvalidArgumentKind::SizeTooLarge`] if `size²` cells cannot be stored.
    #[track_caller]
    #[instrument]
    pub fn solved(size: usize) -> Result<Self, InvalidArgument> {
        Self::validate_size(size)?;
        info!(size, "Creating solved puzzle");
        Ok(Self::from_row_major(size, Self::home_pieces(size)))
    }

    /// Creates a shuffled puzzle using the thread-local RNG.
    ///
    /// See [`Grid::shuffled_with`].
    #[track_caller]
    #[instrument]
    pub fn shuffled(size: usize) -> Result<Self, InvalidArgument> {
        let mut rng = rand::rng();
        Self::shuffled_with(size, &mut rng)
    }

    /// Creates a shuffled puzzle using the provided RNG.
    ///
    /// Slots are filled row-major; each slot takes a uniformly chosen piece
    /// from those not yet placed. The bottom-right cell is always left empty.
    /// Solvability is not checked, so roughly half of the results cannot be
    /// brought back to the solved arrangement.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::solved`].
    #[track_caller]
    #[instrument(skip(rng))]
    pub fn shuffled_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, InvalidArgument> {
        Self::validate_size(size)?;

        let mut pool = Self::home_pieces(size);
        let mut order = Vec::with_capacity(pool.len());
        while !pool.is_empty() {
            let selected = rng.random_range(0..pool.len());
            order.push(pool.swap_remove(selected));
        }

        info!(size, "Creating shuffled puzzle");
        Ok(Self::from_row_major(size, order))
    }

    /// Rebuilds a puzzle from pieces and the empty cell, e.g. from a save file.
    ///
    /// The side length is `sqrt(pieces.len() + 1)`. Pieces keep both their
    /// home and current positions.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidArgument`] if the inputs cannot form a consistent
    /// grid: the count is not `size² - 1` for some `size >= 2`, a position
    /// falls outside the grid, two pieces share a cell or a home, a home is
    /// not a tile slot, or the empty cell is out of bounds or occupied.
    #[track_caller]
    #[instrument(skip(pieces), fields(count = pieces.len()))]
    pub fn from_pieces(pieces: Vec<Piece>, empty: Position) -> Result<Self, InvalidArgument> {
        let count = pieces.len();
        let size = (count + 1).isqrt();
        if size * size != count + 1 {
            return Err(InvalidArgument::new(InvalidArgumentKind::PieceCountNotSquare(count)));
        }
        Self::validate_size(size)?;

        if !empty.within(size) {
            return Err(InvalidArgument::new(InvalidArgumentKind::EmptyOutOfBounds {
                position: empty,
                size,
            }));
        }

        let solved_empty = Position::new(size - 1, size - 1);
        let mut homes = HashSet::with_capacity(count);
        let mut cells = vec![Cell::Empty; size * size];
        for piece in pieces {
            let position = piece.current_position();
            if !position.within(size) {
                return Err(InvalidArgument::new(InvalidArgumentKind::OutOfBounds {
                    position,
                    size,
                }));
            }
            if position == empty {
                return Err(InvalidArgument::new(InvalidArgumentKind::EmptyCellOccupied(empty)));
            }

            let home = piece.home();
            if !home.within(size) || home == solved_empty {
                return Err(InvalidArgument::new(InvalidArgumentKind::UnexpectedHome(home)));
            }
            if !homes.insert(home) {
                return Err(InvalidArgument::new(InvalidArgumentKind::DuplicatePosition(home)));
            }

            let cell = &mut cells[position.to_index(size)];
            if !cell.is_empty() {
                return Err(InvalidArgument::new(InvalidArgumentKind::DuplicatePosition(position)));
            }
            *cell = Cell::Occupied(piece);
        }

        debug!(size, %empty, "Rebuilt puzzle from pieces");
        Ok(Self { size, cells, empty })
    }

    /// Rebuilds a puzzle from a snapshot taken with [`Grid::snapshot`].
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_pieces`].
    #[track_caller]
    #[instrument(skip(snapshot))]
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self, InvalidArgument> {
        let (pieces, empty) = snapshot.into_parts();
        Self::from_pieces(pieces, empty)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current position of the empty cell.
    pub fn empty_position(&self) -> Position {
        self.empty
    }

    /// True if `position` lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.within(self.size)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a copy of the piece at `position`, or `None` for the empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::OutOfBounds`] if `position` is outside
    /// the grid.
    #[track_caller]
    #[instrument(skip(self), fields(size = self.size))]
    pub fn piece_at(&self, position: Position) -> Result<Option<Piece>, InvalidArgument> {
        if !self.contains(position) {
            return Err(InvalidArgument::new(InvalidArgumentKind::OutOfBounds {
                position,
                size: self.size,
            }));
        }
        Ok(self.cells[position.to_index(self.size)].piece())
    }

    /// Like [`Grid::piece_at`], from signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::NegativeCoordinate`] or
    /// [`InvalidArgumentKind::OutOfBounds`].
    #[track_caller]
    #[instrument(skip(self), fields(size = self.size))]
    pub fn piece_at_coordinates(&self, x: i64, y: i64) -> Result<Option<Piece>, InvalidArgument> {
        self.piece_at(Position::from_coordinates(x, y)?)
    }

    /// Every piece on the grid, in row-major order of current position.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(Cell::piece)
    }

    /// Pieces orthogonally adjacent to the empty cell, i.e. the ones that can move.
    #[instrument(skip(self), fields(size = self.size, empty = %self.empty))]
    pub fn movable_pieces(&self) -> Vec<Piece> {
        Direction::iter()
            .filter_map(|direction| self.empty.step(direction))
            .filter(|position| self.contains(*position))
            .filter_map(|position| self.cells[position.to_index(self.size)].piece())
            .collect()
    }

    /// Captures every piece and the empty cell for persistence.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.pieces().collect(), self.empty)
    }

    /// Checks every puzzle invariant against the current arrangement.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        PuzzleInvariants::check_all(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Slides `piece` into `destination`.
    ///
    /// Succeeds only if `destination` is inside the grid, is the empty cell,
    /// and is one orthogonal step from the piece. `piece` must match what
    /// the grid holds at the piece's current position; a stale copy is
    /// refused. Refusals leave the grid untouched and return `false`.
    #[instrument(skip(self), fields(size = self.size, empty = %self.empty))]
    pub fn do_move(&mut self, piece: &Piece, destination: Position) -> bool {
        let action = Move::new(*piece, destination);
        match MoveContract::pre(self, &action) {
            Ok(()) => {
                self.apply(action);
                true
            }
            Err(rejection) => {
                debug!(%action, %rejection, "Move rejected");
                false
            }
        }
    }

    /// Slides `piece` into the empty cell, if it is adjacent.
    ///
    /// Same as [`Grid::do_move`] with the empty cell as destination.
    #[instrument(skip(self), fields(size = self.size, empty = %self.empty))]
    pub fn do_move_to_empty(&mut self, piece: &Piece) -> bool {
        let action = Move::new(*piece, self.empty);
        match AdjacentMove::check(&action, self) {
            Ok(()) => {
                self.apply(action);
                true
            }
            Err(rejection) => {
                debug!(%action, %rejection, "Move rejected");
                false
            }
        }
    }

    /// Applies an adjacent move whose preconditions have been checked.
    fn apply(&mut self, action: Move) {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let from = action.piece.current_position();
        let to = action.destination;
        let mut piece = action.piece;
        piece.move_to(to);

        self.cells[from.to_index(self.size)] = Cell::Empty;
        self.cells[to.to_index(self.size)] = Cell::Occupied(piece);
        self.empty = from;
        debug!(%action, "Move applied");

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "{:?}", checked);
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for (row_idx, row) in self.cells.chunks(self.size).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Occupied(piece) => write!(f, "{:>width$}", piece.label(self.size))?,
                    Cell::Empty => write!(f, "{:>width$}", "")?,
                }
            }
        }
        Ok(())
    }
}
