//! The sliding-tile board value type.

use std::fmt::{self, Display, Write as _};
use std::ops::Index;

use crate::Position;

/// Smallest supported board side (a 1×1 board has no moves at all).
pub const MIN_SIZE: u8 = 2;

/// Largest supported board side.
///
/// Tile labels are stored as `u8`, and a 16×16 board's last label is 255.
pub const MAX_SIZE: u8 = 16;

/// Errors produced when constructing a [`Board`] from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The flat tile sequence cannot form a square board.
    #[display("tile count {len} is not a perfect square")]
    NotSquare {
        /// Number of tiles supplied.
        len: usize,
    },
    /// The board side is below [`MIN_SIZE`].
    #[display("board size {n} is below the minimum of {MIN_SIZE}")]
    SizeTooSmall {
        /// Requested board side.
        n: usize,
    },
    /// The board side is above [`MAX_SIZE`].
    #[display("board size {n} exceeds the maximum of {MAX_SIZE}")]
    SizeTooLarge {
        /// Requested board side.
        n: usize,
    },
    /// The rows of a 2D tile layout have differing lengths.
    #[display("row {row} has {len} tiles, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected row length.
        expected: usize,
    },
    /// A tile label does not fit the board's label range.
    #[display("tile label {tile} is out of range for a board of {len} cells")]
    TileOutOfRange {
        /// The offending label.
        tile: u8,
        /// Number of cells on the board.
        len: usize,
    },
    /// A tile label appears more than once.
    #[display("tile label {tile} appears more than once")]
    DuplicateTile {
        /// The duplicated label.
        tile: u8,
    },
}

/// An N×N arrangement of tile labels `1..n²-1` plus one blank (`0`).
///
/// A board is an immutable value: every transformation (see
/// [`with_blank_swapped`](Self::with_blank_swapped) and
/// [`successors`](crate::successors)) produces a new `Board`. Equality and
/// hashing cover the full tile sequence, so two boards compare equal exactly
/// when all cells match — the property the search's visited set relies on.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, Position};
///
/// let board = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?;
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.tile(Position::new(0, 0)), 1);
/// assert_eq!(board.blank_position(), Position::new(1, 2));
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    tiles: Vec<u8>,
}

impl Board {
    /// Creates a board from a row-major flat tile sequence.
    ///
    /// The sequence length must be a perfect square `n²` with
    /// [`MIN_SIZE`] `<= n <=` [`MAX_SIZE`], and the label multiset must be
    /// exactly `{0, 1, ..., n²-1}`.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`BoardError`] variant when the shape or
    /// the label multiset is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, BoardError};
    ///
    /// let board = Board::from_tiles(vec![0, 1, 3, 2])?;
    /// assert_eq!(board.size(), 2);
    ///
    /// assert_eq!(
    ///     Board::from_tiles(vec![0, 1, 2]),
    ///     Err(BoardError::NotSquare { len: 3 }),
    /// );
    /// assert_eq!(
    ///     Board::from_tiles(vec![0, 1, 2, 2]),
    ///     Err(BoardError::DuplicateTile { tile: 2 }),
    /// );
    /// # Ok::<(), BoardError>(())
    /// ```
    pub fn from_tiles(tiles: Vec<u8>) -> Result<Self, BoardError> {
        let len = tiles.len();
        let mut n = 0_usize;
        while n * n < len {
            n += 1;
        }
        if n * n != len {
            return Err(BoardError::NotSquare { len });
        }
        let size = match u8::try_from(n) {
            Ok(size) if size <= MAX_SIZE => size,
            _ => return Err(BoardError::SizeTooLarge { n }),
        };
        if size < MIN_SIZE {
            return Err(BoardError::SizeTooSmall { n });
        }

        let mut seen = vec![false; len];
        for &tile in &tiles {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(BoardError::TileOutOfRange { tile, len })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }

        Ok(Self { size, tiles })
    }

    /// Creates a board from a 2D row layout.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RaggedRows`] if any row's length differs from
    /// the row count, and otherwise the same errors as
    /// [`from_tiles`](Self::from_tiles).
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Board;
    ///
    /// let board = Board::from_rows(&[vec![1, 2], vec![3, 0]])?;
    /// assert!(board.is_goal());
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let expected = rows.len();
        let mut tiles = Vec::with_capacity(expected * expected);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(BoardError::RaggedRows {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            tiles.extend_from_slice(cells);
        }
        Self::from_tiles(tiles)
    }

    /// Creates the canonical goal board of side `n`: labels `1..n²-1` in
    /// row-major order, blank in the last cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] or [`BoardError::SizeTooLarge`]
    /// when `n` is outside [`MIN_SIZE`]`..=`[`MAX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, Position};
    ///
    /// let goal = Board::goal_of_size(3)?;
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// assert_eq!(goal.blank_position(), Position::new(2, 2));
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    pub fn goal_of_size(n: u8) -> Result<Self, BoardError> {
        if n < MIN_SIZE {
            return Err(BoardError::SizeTooSmall { n: usize::from(n) });
        }
        if n > MAX_SIZE {
            return Err(BoardError::SizeTooLarge { n: usize::from(n) });
        }
        Ok(Self::goal_tiles(n))
    }

    /// Returns the goal board of the same size as `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Board;
    ///
    /// let board = Board::from_tiles(vec![0, 1, 3, 2])?;
    /// assert_eq!(board.goal().tiles(), &[1, 2, 3, 0]);
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn goal(&self) -> Self {
        Self::goal_tiles(self.size)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn goal_tiles(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        // len <= 256, so every label fits in u8
        let mut tiles: Vec<u8> = (1..len).map(|tile| tile as u8).collect();
        tiles.push(0);
        Self { size, tiles }
    }

    /// Returns the board side `n`.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the row-major flat tile sequence.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile label at `pos` (`0` is the blank).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn tile(&self, pos: Position) -> u8 {
        assert!(
            pos.x() < self.size && pos.y() < self.size,
            "position {pos} is outside a {n}x{n} board",
            n = self.size,
        );
        self.tiles[self.flat_index(pos)]
    }

    /// Returns the position of the blank cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, Position};
    ///
    /// let board = Board::from_tiles(vec![1, 0, 2, 3])?;
    /// assert_eq!(board.blank_position(), Position::new(1, 0));
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn blank_position(&self) -> Position {
        let index = self
            .tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("a valid board contains exactly one blank");
        self.position_at(index)
    }

    /// Returns `true` if this board is the canonical goal arrangement.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Board;
    ///
    /// assert!(Board::from_tiles(vec![1, 2, 3, 0])?.is_goal());
    /// assert!(!Board::from_tiles(vec![0, 1, 3, 2])?.is_goal());
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile == if i == last { 0 } else { (i + 1) as u8 })
    }

    /// Returns a new board with the blank swapped with the tile at `pos`.
    ///
    /// The original board is left untouched; this is the only primitive the
    /// move generator needs.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Board, Position};
    ///
    /// let board = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8])?;
    /// let moved = board.with_blank_swapped(Position::new(2, 2));
    /// assert!(moved.is_goal());
    /// // The original is unchanged.
    /// assert_eq!(board.tile(Position::new(1, 2)), 0);
    /// # Ok::<(), taquin_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn with_blank_swapped(&self, pos: Position) -> Self {
        let blank = self.flat_index(self.blank_position());
        let other = self.flat_index(pos);
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, other);
        Self {
            size: self.size,
            tiles,
        }
    }

    fn flat_index(&self, pos: Position) -> usize {
        usize::from(pos.y()) * usize::from(self.size) + usize::from(pos.x())
    }

    #[expect(clippy::cast_possible_truncation)]
    fn position_at(&self, index: usize) -> Position {
        let size = usize::from(self.size);
        // index < size² <= 256 and size <= 16, so both coordinates fit in u8
        Position::new((index % size) as u8, (index / size) as u8)
    }
}

impl Index<Position> for Board {
    type Output = u8;

    fn index(&self, pos: Position) -> &u8 {
        &self.tiles[self.flat_index(pos)]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for (i, row) in self.tiles.chunks(usize::from(self.size)).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{tile:>width$}")?;
            }
        }
        Ok(())
    }
}
