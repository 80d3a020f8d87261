//! Inversion-parity solvability test.
//!
//! Exactly half of all tile permutations can reach the goal by legal slides.
//! Whether a given arrangement belongs to that half is decided by the parity
//! of its inversions, combined with the blank's row for even board sides.

use crate::Board;

/// Counts the inversions of a board's non-blank labels in reading order.
///
/// A pair of labels `(a, b)` with `a` appearing before `b` is an inversion
/// when `a > b`. The blank does not participate.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, count_inversions};
///
/// let goal = Board::goal_of_size(3)?;
/// assert_eq!(count_inversions(&goal), 0);
///
/// // 2 appears before 1: one inversion.
/// let board = Board::from_tiles(vec![2, 1, 3, 4, 5, 6, 7, 8, 0])?;
/// assert_eq!(count_inversions(&board), 1);
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[must_use]
pub fn count_inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&tile| tile != 0)
        .collect();
    let mut inversions = 0;
    for (i, &a) in tiles.iter().enumerate() {
        inversions += tiles[i + 1..].iter().filter(|&&b| a > b).count();
    }
    inversions
}

/// Returns `true` if the board can reach the goal by legal slides.
///
/// For odd board sides the arrangement is solvable iff the inversion count
/// is even. For even sides it is solvable iff the inversion count plus the
/// blank's row distance from the bottom row is even (the textbook rule; the
/// goal itself has zero inversions and the blank on the bottom row).
///
/// Pure and deterministic: calling it twice on the same board always yields
/// the same answer.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, is_solvable};
///
/// assert!(is_solvable(&Board::goal_of_size(3)?));
///
/// // Swapping two adjacent tiles flips the parity.
/// let swapped = Board::from_tiles(vec![2, 1, 3, 4, 5, 6, 7, 8, 0])?;
/// assert!(!is_solvable(&swapped));
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board);
    if board.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_rows_from_bottom = usize::from(board.size() - 1 - board.blank_position().y());
        (inversions + blank_rows_from_bottom) % 2 == 0
    }
}
