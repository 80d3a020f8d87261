//! Heuristic estimates of the remaining move count.

use taquin_core::Board;

/// An estimate of how many moves separate a board from its goal.
///
/// The search engine's optimality guarantee requires the estimate to be
/// *admissible* (never above the true remaining move count). Implementations
/// must be pure: the same board always yields the same estimate.
pub trait Heuristic {
    /// Estimates the number of moves from `board` to its goal.
    fn estimate(&self, board: &Board) -> u32;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, board: &Board) -> u32 {
        (**self).estimate(board)
    }
}

/// Sum of every tile's Manhattan distance to its goal cell.
///
/// The blank is ignored. Each legal slide moves exactly one tile one step,
/// so the total changes by exactly ±1 per move, making the estimate both
/// admissible and consistent.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::{Heuristic as _, ManhattanDistance};
///
/// let goal = Board::goal_of_size(3)?;
/// assert_eq!(ManhattanDistance.estimate(&goal), 0);
///
/// // 8 and 7 are each one step from home.
/// let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]])?;
/// assert_eq!(ManhattanDistance.estimate(&board), 2);
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    #[expect(clippy::cast_possible_truncation)]
    fn estimate(&self, board: &Board) -> u32 {
        let n = u32::from(board.size());
        let mut distance = 0;
        for (index, &tile) in board.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            // index < n² <= 256, so the cast is lossless
            let index = index as u32;
            let goal = u32::from(tile) - 1;
            distance += (index / n).abs_diff(goal / n) + (index % n).abs_diff(goal % n);
        }
        distance
    }
}
