//! Grid coordinates and the four sliding directions.

use crate::error::{InvalidArgument, InvalidArgumentKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Immutable, non-negative rectangular coordinates on a puzzle grid.
///
/// `x` grows to the right, `y` grows downwards. Equality and hashing are
/// structural, so positions can be copied and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from coordinates that are non-negative by type.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a position from signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::NegativeCoordinate`] if either
    /// coordinate is below zero.
    #[track_caller]
    #[instrument]
    pub fn from_coordinates(x: i64, y: i64) -> Result<Self, InvalidArgument> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(InvalidArgument::new(InvalidArgumentKind::NegativeCoordinate(x, y))),
        }
    }

    /// Horizontal coordinate.
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Creates the position at a row-major index on a grid of the given size.
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self::new(index % size, index / size)
    }

    /// Converts the position to a row-major index on a grid of the given size.
    pub const fn to_index(self, size: usize) -> usize {
        self.y * size + self.x
    }

    /// Returns true if the position lies inside a `size`×`size` grid.
    pub const fn within(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Sum of the absolute coordinate differences.
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds depend on the grid and are left to the caller.
    pub fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
        }
    }
}

impl TryFrom<(i64, i64)> for Position {
    type Error = InvalidArgument;

    #[track_caller]
    fn try_from((x, y): (i64, i64)) -> Result<Self, Self::Error> {
        Self::from_coordinates(x, y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four orthogonal directions a tile can slide.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}
