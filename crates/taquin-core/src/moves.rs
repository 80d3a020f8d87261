//! Enumeration of the boards reachable by sliding one tile.

use crate::Board;

/// Returns every board reachable from `board` by sliding exactly one tile
/// into the blank.
///
/// One new board is produced per in-bounds orthogonal neighbor of the blank,
/// in the fixed order up, down, left, right (stable, but not semantically
/// meaningful). A corner blank yields 2 successors, an edge blank 3, an
/// interior blank 4 — never fewer than 2. The input board is not mutated.
///
/// # Examples
///
/// ```
/// use taquin_core::{Board, successors};
///
/// let goal = Board::goal_of_size(3)?;
/// let next = successors(&goal);
///
/// // The blank is in a corner, so exactly two tiles can slide into it.
/// assert_eq!(next.len(), 2);
/// assert!(next.iter().all(|board| *board != goal));
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[must_use]
pub fn successors(board: &Board) -> Vec<Board> {
    let blank = board.blank_position();
    blank
        .neighbors(board.size())
        .into_iter()
        .map(|neighbor| board.with_blank_swapped(neighbor))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Position;

    #[test]
    fn test_corner_blank_has_two_successors() {
        let board = Board::from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
        let next = successors(&board);
        assert_eq!(next.len(), 2);
        // Up: 2 slides down. Left: 3 slides right.
        assert_eq!(next[0].tiles(), &[1, 0, 3, 2]);
        assert_eq!(next[1].tiles(), &[1, 2, 0, 3]);
    }

    #[test]
    fn test_interior_blank_has_four_successors() {
        let board =
            Board::from_rows(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]).unwrap();
        let next = successors(&board);
        assert_eq!(next.len(), 4);
        let blanks: Vec<Position> = next.iter().map(Board::blank_position).collect();
        assert_eq!(
            blanks,
            vec![
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board = Board::from_rows(&[vec![0, 1], vec![3, 2]]).unwrap();
        let _ = successors(&board);
        assert_eq!(board.tiles(), &[0, 1, 3, 2]);
    }

    fn permutation(n: u8) -> impl Strategy<Value = Vec<u8>> {
        let len = usize::from(n) * usize::from(n);
        #[expect(clippy::cast_possible_truncation)]
        let tiles: Vec<u8> = (0..len).map(|tile| tile as u8).collect();
        Just(tiles).prop_shuffle()
    }

    proptest! {
        #[test]
        fn test_successor_invariants(tiles in permutation(3)) {
            let board = Board::from_tiles(tiles).unwrap();
            let next = successors(&board);

            prop_assert!((2..=4).contains(&next.len()));
            for successor in &next {
                prop_assert_ne!(successor, &board);
                prop_assert!(
                    successor.blank_position().is_adjacent_to(board.blank_position())
                );
            }
            // All successors are distinct from one another.
            for (i, a) in next.iter().enumerate() {
                for b in &next[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }
}
