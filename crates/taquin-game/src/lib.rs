//! Puzzle game sessions.
//!
//! A [`Game`] wires the other crates together the way a presentation layer
//! consumes them: scramble a board, gate it on solvability, solve it, then
//! walk the solution one board at a time while counting turns. The walk is
//! read-only and paced entirely by the caller, so a renderer can animate
//! each step at its own speed.
//!
//! # Examples
//!
//! ```
//! use taquin_game::Game;
//! use taquin_generator::ScrambleSeed;
//!
//! let mut game = Game::with_seed(2, ScrambleSeed::from_bytes([5; 32]))?;
//!
//! while game.advance().is_some() {}
//!
//! assert!(game.is_finished());
//! assert!(game.board().is_goal());
//! assert_eq!(game.turns(), game.optimal_moves());
//! # Ok::<(), taquin_game::GameError>(())
//! ```

use taquin_core::{Board, is_solvable};
use taquin_generator::{ScrambleError, ScrambleSeed, Scrambler};
use taquin_solver::{Heuristic, ManhattanDistance, SearchOutcome, Solution, Solver};

/// Errors produced while setting up a [`Game`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// Scramble generation failed.
    #[display("{_0}")]
    #[from]
    Scramble(ScrambleError),
    /// The supplied board cannot reach the goal.
    #[display("board is not solvable")]
    Unsolvable,
    /// The search drained its frontier without reaching the goal.
    ///
    /// Should never happen for a board that passed the solvability gate;
    /// treat it as an internal-consistency failure.
    #[display("search exhausted after expanding {expanded} states")]
    SearchExhausted {
        /// States expanded before the frontier drained.
        expanded: usize,
    },
    /// The search hit its expansion budget before finding the goal.
    #[display("search aborted after expanding {expanded} states")]
    SearchAborted {
        /// States expanded before the budget ran out.
        expanded: usize,
    },
}

/// One puzzle instance: a solved scramble and a cursor walking its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    seed: Option<ScrambleSeed>,
    solution: Solution,
    cursor: usize,
    turns: usize,
}

impl Game {
    /// Scrambles a fresh `n`×`n` board and solves it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Scramble`] for unsupported sizes or an exhausted
    /// scrambler, and the search variants if solving fails.
    pub fn new(n: u8) -> Result<Self, GameError> {
        Self::with_seed(n, ScrambleSeed::random())
    }

    /// Scrambles the `n`×`n` board determined by `seed` and solves it.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_seed(n: u8, seed: ScrambleSeed) -> Result<Self, GameError> {
        Self::with_solver(n, seed, &Solver::new(ManhattanDistance))
    }

    /// Scrambles the `n`×`n` board determined by `seed` and solves it with a
    /// caller-configured solver (for example one with an expansion budget).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_solver<H: Heuristic>(
        n: u8,
        seed: ScrambleSeed,
        solver: &Solver<H>,
    ) -> Result<Self, GameError> {
        let scramble = Scrambler::new().scramble_with_seed(n, seed)?;
        let mut game = Self::from_board(scramble.board, solver)?;
        game.seed = Some(scramble.seed);
        Ok(game)
    }

    /// Builds a session for an existing board, gating on solvability first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Unsolvable`] if the board fails the solvability
    /// test, and the search variants if solving fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Board;
    /// use taquin_game::{Game, GameError};
    /// use taquin_solver::{ManhattanDistance, Solver};
    ///
    /// let solver = Solver::new(ManhattanDistance);
    ///
    /// let start = Board::from_rows(&[vec![0, 1], vec![3, 2]])?;
    /// let game = Game::from_board(start, &solver)?;
    /// assert_eq!(game.optimal_moves(), 2);
    ///
    /// let swapped = Board::from_rows(&[vec![2, 1], vec![3, 0]])?;
    /// assert_eq!(
    ///     Game::from_board(swapped, &solver),
    ///     Err(GameError::Unsolvable),
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_board<H: Heuristic>(
        board: Board,
        solver: &Solver<H>,
    ) -> Result<Self, GameError> {
        if !is_solvable(&board) {
            return Err(GameError::Unsolvable);
        }
        match solver.solve(&board) {
            SearchOutcome::Solved(solution) => Ok(Self {
                seed: None,
                solution,
                cursor: 0,
                turns: 0,
            }),
            SearchOutcome::Exhausted { expanded } => Err(GameError::SearchExhausted { expanded }),
            SearchOutcome::Aborted { expanded } => Err(GameError::SearchAborted { expanded }),
        }
    }

    /// Returns the seed behind this game's scramble, if it was generated
    /// rather than supplied via [`from_board`](Self::from_board).
    #[must_use]
    pub fn seed(&self) -> Option<ScrambleSeed> {
        self.seed
    }

    /// Returns the board the walk currently points at.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.solution.path()[self.cursor]
    }

    /// Returns the scrambled start board.
    #[must_use]
    pub fn start(&self) -> &Board {
        &self.solution.path()[0]
    }

    /// Steps the walk to the next board in the solution, counting one turn.
    ///
    /// Returns `None` once the goal has been reached; the turn count stops
    /// with it.
    pub fn advance(&mut self) -> Option<&Board> {
        if self.is_finished() {
            return None;
        }
        self.cursor += 1;
        self.turns += 1;
        Some(&self.solution.path()[self.cursor])
    }

    /// Returns the number of turns taken so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Returns `true` once the walk has reached the goal board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor + 1 == self.solution.path().len()
    }

    /// Returns the minimal number of moves for this scramble.
    #[must_use]
    pub fn optimal_moves(&self) -> usize {
        self.solution.moves()
    }

    /// Returns the underlying solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

#[cfg(test)]
mod tests {
    use taquin_core::successors;
    use taquin_solver::SearchLimits;

    use super::*;

    fn solver() -> Solver<ManhattanDistance> {
        Solver::new(ManhattanDistance)
    }

    #[test]
    fn test_goal_board_finishes_immediately() {
        let mut game = Game::from_board(Board::goal_of_size(3).unwrap(), &solver()).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.optimal_moves(), 0);
        assert_eq!(game.advance(), None);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_walk_counts_each_turn_once() {
        let start = Board::from_rows(&[vec![0, 1], vec![3, 2]]).unwrap();
        let mut game = Game::from_board(start.clone(), &solver()).unwrap();

        assert_eq!(game.board(), &start);
        assert_eq!(game.start(), &start);
        assert_eq!(game.optimal_moves(), 2);

        let mut steps = 0;
        while game.advance().is_some() {
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert_eq!(game.turns(), 2);
        assert!(game.is_finished());
        assert!(game.board().is_goal());

        // Advancing past the goal neither moves nor counts.
        assert_eq!(game.advance(), None);
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn test_moderate_scramble_walks_to_goal() {
        // Deterministic 12-step blank walk keeps the search small.
        let mut board = Board::goal_of_size(3).unwrap();
        for step in 0..12 {
            let next = successors(&board);
            board = next[(step * 5 + 1) % next.len()].clone();
        }

        let mut game = Game::from_board(board, &solver()).unwrap();
        while game.advance().is_some() {}
        assert_eq!(game.turns(), game.optimal_moves());
        assert!(game.board().is_goal());
    }

    #[test]
    fn test_unsolvable_board_is_gated() {
        let swapped = Board::from_rows(&[vec![2, 1], vec![3, 0]]).unwrap();
        assert_eq!(
            Game::from_board(swapped, &solver()),
            Err(GameError::Unsolvable)
        );
    }

    #[test]
    fn test_budgeted_solver_surfaces_abort() {
        let limited = Solver::with_limits(
            ManhattanDistance,
            SearchLimits {
                max_expansions: Some(0),
            },
        );
        let start = Board::from_rows(&[vec![0, 1], vec![3, 2]]).unwrap();
        assert_eq!(
            Game::from_board(start, &limited),
            Err(GameError::SearchAborted { expanded: 0 })
        );
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let seed = ScrambleSeed::from_bytes([3; 32]);
        let a = Game::with_seed(2, seed).unwrap();
        let b = Game::with_seed(2, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), Some(seed));
    }
}
