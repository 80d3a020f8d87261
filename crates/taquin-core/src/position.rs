//! Board position coordinate types.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

/// A cell coordinate on an N×N board.
///
/// `x` is the column (0-based, left to right) and `y` the row (0-based, top
/// to bottom).
///
/// # Examples
///
/// ```
/// use taquin_core::Position;
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column (0-based).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-based).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the in-bounds orthogonal neighbors on a board of side
    /// `size`, in the fixed order up, down, left, right.
    ///
    /// A corner position has 2 neighbors, an edge position 3, an interior
    /// position 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Position;
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.neighbors(3).len(), 2);
    ///
    /// let center = Position::new(1, 1);
    /// assert_eq!(center.neighbors(3).len(), 4);
    /// ```
    #[must_use]
    pub fn neighbors(self, size: u8) -> ArrayVec<[Self; 4]> {
        let mut neighbors = ArrayVec::new();
        if self.y > 0 {
            neighbors.push(Self::new(self.x, self.y - 1));
        }
        if self.y + 1 < size {
            neighbors.push(Self::new(self.x, self.y + 1));
        }
        if self.x > 0 {
            neighbors.push(Self::new(self.x - 1, self.y));
        }
        if self.x + 1 < size {
            neighbors.push(Self::new(self.x + 1, self.y));
        }
        neighbors
    }

    /// Returns `true` if `other` is exactly one orthogonal step away.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Position;
    ///
    /// assert!(Position::new(1, 1).is_adjacent_to(Position::new(1, 2)));
    /// assert!(!Position::new(1, 1).is_adjacent_to(Position::new(2, 2)));
    /// ```
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
