//! Optimal sliding-tile puzzle solving.
//!
//! This crate turns a scrambled [`Board`](taquin_core::Board) into an
//! optimal sequence of single-tile moves using heuristic-guided best-first
//! (A*) search:
//!
//! - [`Heuristic`]: the estimate seam, with the supplied
//!   [`ManhattanDistance`] implementation
//! - [`Solver`]: the search engine, with its [`SearchLimits`] and the
//!   [`SearchOutcome`]/[`Solution`] result types
//!
//! # Examples
//!
//! ```
//! use taquin_core::Board;
//! use taquin_solver::{ManhattanDistance, Solver};
//!
//! let start = Board::from_rows(&[vec![0, 1], vec![3, 2]])?;
//! let outcome = Solver::new(ManhattanDistance).solve(&start);
//!
//! let solution = outcome.into_solution().expect("this scramble is solvable");
//! assert_eq!(solution.moves(), 2);
//! assert!(solution.path().last().is_some_and(Board::is_goal));
//! # Ok::<(), taquin_core::BoardError>(())
//! ```
//!
//! # Operating constraint
//!
//! The state space of an n×n puzzle has `(n²)!/2` reachable states. 3×3
//! puzzles solve in milliseconds; 4×4 already pushes practical limits
//! sharply. Use [`SearchLimits`] to bound the work instead of blocking
//! indefinitely on large boards.

pub use self::{heuristic::*, search::*};

mod heuristic;
mod search;
