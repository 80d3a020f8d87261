//! Best-first (A*) search over board states.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, warn};
use taquin_core::{Board, successors};

use crate::Heuristic;

/// Resource bounds for one [`Solver::solve`] call.
///
/// The default imposes no bound: the search runs until it finds the goal or
/// drains the frontier. On large boards that can block for a very long time
/// (the state space grows as `(n²)!/2`), so callers that need availability
/// set [`max_expansions`](Self::max_expansions) and handle
/// [`SearchOutcome::Aborted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand before giving up, or `None` for
    /// no bound.
    pub max_expansions: Option<usize>,
}

/// An optimal move sequence from a scrambled board to its goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    expanded: usize,
    path: Vec<Board>,
}

impl Solution {
    /// Returns the number of distinct states the search expanded.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the boards from start to goal, both inclusive.
    ///
    /// Each consecutive pair differs by exactly one legal slide, so a
    /// renderer can walk the sequence one element at a time.
    #[must_use]
    pub fn path(&self) -> &[Board] {
        &self.path
    }

    /// Returns the number of moves in the solution (one less than the path
    /// length). Minimal, because the heuristic is admissible.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    /// Consumes the solution, returning the owned path.
    #[must_use]
    pub fn into_path(self) -> Vec<Board> {
        self.path
    }
}

/// The result of one [`Solver::solve`] call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// The goal was reached; the contained path is optimal.
    Solved(Solution),
    /// The frontier drained without reaching the goal.
    ///
    /// This cannot happen for a solvable start: it means an unsolvable board
    /// slipped past the solvability gate, so callers should treat it as an
    /// internal-consistency failure rather than a normal result.
    Exhausted {
        /// States expanded before the frontier drained.
        expanded: usize,
    },
    /// The [`SearchLimits::max_expansions`] budget was spent first.
    Aborted {
        /// States expanded before the budget ran out.
        expanded: usize,
    },
}

impl SearchOutcome {
    /// Returns the solution if the search succeeded.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted { .. } | Self::Aborted { .. } => None,
        }
    }

    /// Consumes the outcome, returning the solution if the search
    /// succeeded.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted { .. } | Self::Aborted { .. } => None,
        }
    }
}

/// A frontier entry: the full start-to-state path plus its priority.
///
/// Ordering is reversed on `(f, seq)` so that `BinaryHeap`, a max-heap,
/// pops the lowest `f` first and breaks ties by insertion order (FIFO).
struct Node {
    f: u32,
    g: u32,
    seq: u64,
    path: Vec<Board>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A best-first (A*) search engine over board states.
///
/// The frontier is a binary heap keyed by `f = g + h` (path cost so far plus
/// heuristic estimate); a hash set of expanded boards prevents
/// re-expansion. Ties between equal priorities are broken by insertion
/// order, oldest first, which makes `solve` fully deterministic: the same
/// start board always yields the same path.
///
/// # Examples
///
/// ```
/// use taquin_core::Board;
/// use taquin_solver::{ManhattanDistance, SearchLimits, Solver};
///
/// let solver = Solver::new(ManhattanDistance);
/// let start = Board::from_rows(&[vec![0, 2, 3], vec![1, 4, 6], vec![7, 5, 8]])?;
///
/// let solution = solver.solve(&start).into_solution().expect("solvable");
/// assert_eq!(solution.moves(), 4);
///
/// // A budget-limited solver reports an explicit abort instead of blocking.
/// let limited = Solver::with_limits(
///     ManhattanDistance,
///     SearchLimits { max_expansions: Some(1) },
/// );
/// assert!(limited.solve(&start).is_aborted());
/// # Ok::<(), taquin_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<H> {
    heuristic: H,
    limits: SearchLimits,
}

impl<H: Heuristic> Solver<H> {
    /// Creates a solver with no resource bounds.
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self::with_limits(heuristic, SearchLimits::default())
    }

    /// Creates a solver with the given resource bounds.
    #[must_use]
    pub fn with_limits(heuristic: H, limits: SearchLimits) -> Self {
        Self { heuristic, limits }
    }

    /// Returns the configured resource bounds.
    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Searches for an optimal move sequence from `start` to its goal.
    ///
    /// The goal check happens when a state is popped, before it is
    /// expanded: solving a board that already is the goal reports zero
    /// expansions and a one-element path. States popped a second time are
    /// discarded without being counted.
    ///
    /// Runs to completion synchronously; there is no intermediate
    /// observable state. See [`SearchLimits`] for bounding the work.
    #[must_use]
    pub fn solve(&self, start: &Board) -> SearchOutcome {
        let goal = start.goal();
        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<Board> = HashSet::new();
        let mut expanded = 0_usize;
        let mut seq = 0_u64;

        debug!(
            "solving {n}x{n} board, h(start) = {h}",
            n = start.size(),
            h = self.heuristic.estimate(start),
        );

        frontier.push(Node {
            f: self.heuristic.estimate(start),
            g: 0,
            seq,
            path: vec![start.clone()],
        });

        while let Some(node) = frontier.pop() {
            let current = node
                .path
                .last()
                .expect("frontier paths always contain at least the start");

            if *current == goal {
                debug!(
                    "solved in {moves} moves after expanding {expanded} states",
                    moves = node.path.len() - 1,
                );
                return SearchOutcome::Solved(Solution {
                    expanded,
                    path: node.path,
                });
            }
            if visited.contains(current) {
                continue;
            }
            if self
                .limits
                .max_expansions
                .is_some_and(|budget| expanded >= budget)
            {
                warn!("search aborted after expanding {expanded} states");
                return SearchOutcome::Aborted { expanded };
            }

            visited.insert(current.clone());
            expanded += 1;

            for successor in successors(current) {
                if visited.contains(&successor) {
                    continue;
                }
                let g = node.g + 1;
                let f = g + self.heuristic.estimate(&successor);
                seq += 1;
                let mut path = node.path.clone();
                path.push(successor);
                frontier.push(Node { f, g, seq, path });
            }
        }

        // Reachable only when the start is unsolvable, which the scrambler's
        // solvability gate is supposed to rule out.
        warn!("search exhausted after expanding {expanded} states");
        SearchOutcome::Exhausted { expanded }
    }
}

#[cfg(test)]
mod tests {
    use taquin_core::is_solvable;

    use super::*;
    use crate::ManhattanDistance;

    fn solver() -> Solver<ManhattanDistance> {
        Solver::new(ManhattanDistance)
    }

    #[test]
    fn test_goal_board_solves_without_expansion() {
        for n in 2..=4 {
            let goal = Board::goal_of_size(n).unwrap();
            let solution = solver().solve(&goal).into_solution().unwrap();
            assert_eq!(solution.expanded(), 0);
            assert_eq!(solution.moves(), 0);
            assert_eq!(solution.path(), &[goal]);
        }
    }

    #[test]
    fn test_two_by_two_known_optimum() {
        // Hand-derived: slide 1 left, then 2 up. Manhattan distance is also
        // 2, so no shorter solution exists.
        let start = Board::from_rows(&[vec![0, 1], vec![3, 2]]).unwrap();
        let solution = solver().solve(&start).into_solution().unwrap();

        assert_eq!(solution.moves(), 2);
        assert_eq!(solution.path().first(), Some(&start));
        assert_eq!(
            solution.path().last().map(Board::tiles),
            Some([1, 2, 3, 0].as_slice())
        );
    }

    #[test]
    fn test_three_by_three_known_optimum() {
        // Four slides from the goal, with Manhattan distance exactly 4.
        let start =
            Board::from_rows(&[vec![0, 2, 3], vec![1, 4, 6], vec![7, 5, 8]]).unwrap();
        let solution = solver().solve(&start).into_solution().unwrap();

        assert_eq!(solution.moves(), 4);
        assert!(solution.expanded() >= 4);
        assert!(solution.path().last().unwrap().is_goal());
    }

    #[test]
    fn test_path_steps_are_legal_slides() {
        let start =
            Board::from_rows(&[vec![4, 1, 3], vec![7, 2, 5], vec![0, 8, 6]]).unwrap();
        assert!(is_solvable(&start));
        let solution = solver().solve(&start).into_solution().unwrap();

        for pair in solution.path().windows(2) {
            let [prev, next] = pair else { unreachable!() };
            let step = next.blank_position();
            assert!(prev.blank_position().is_adjacent_to(step));
            // Re-applying the slide to the previous board reproduces the
            // next board exactly: no drift along the path.
            assert_eq!(&prev.with_blank_swapped(step), next);
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let start =
            Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![0, 7, 8]]).unwrap();
        let first = solver().solve(&start);
        let second = solver().solve(&start);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsolvable_board_exhausts_the_component() {
        // One adjacent transposition away from the goal: unsolvable, and
        // the reachable component of a 2×2 board has 4!/2 = 12 states.
        let start = Board::from_rows(&[vec![2, 1], vec![3, 0]]).unwrap();
        assert!(!is_solvable(&start));

        let outcome = solver().solve(&start);
        assert_eq!(outcome, SearchOutcome::Exhausted { expanded: 12 });
    }

    #[test]
    fn test_expansion_budget_aborts_explicitly() {
        let start = Board::from_rows(&[vec![0, 1], vec![3, 2]]).unwrap();
        let limited = Solver::with_limits(
            ManhattanDistance,
            SearchLimits {
                max_expansions: Some(0),
            },
        );
        assert_eq!(
            limited.solve(&start),
            SearchOutcome::Aborted { expanded: 0 }
        );

        // The goal check precedes the budget check, so a zero budget still
        // recognizes an already-solved board.
        let goal = start.goal();
        assert!(limited.solve(&goal).is_solved());
    }

    #[test]
    fn test_walk_scramble_solves_within_walk_length() {
        // Walk the blank 14 steps away from the goal. The optimum can only
        // be shorter or equal, is bounded below by the heuristic, and must
        // share the parity of h(start) since each move changes h by ±1.
        let mut start = Board::goal_of_size(3).unwrap();
        let picks = [0, 2, 3, 1, 0, 2, 1, 3, 0, 1, 2, 0, 3, 1];
        for pick in picks {
            let next = successors(&start);
            start = next[pick % next.len()].clone();
        }

        let h = ManhattanDistance.estimate(&start) as usize;
        let solution = solver().solve(&start).into_solution().unwrap();
        assert!(solution.moves() <= picks.len());
        assert!(solution.moves() >= h);
        assert_eq!(solution.moves() % 2, h % 2);
        assert_eq!(solution.path().first(), Some(&start));
        assert!(solution.path().last().unwrap().is_goal());
    }
}
