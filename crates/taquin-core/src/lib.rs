//! Core data structures for sliding-tile (n-puzzle) applications.
//!
//! This crate provides the value types and pure functions shared by the
//! solving, generation, and game-session components:
//!
//! - [`Board`]: an N×N arrangement of tile labels with exactly one blank,
//!   validated on construction
//! - [`Position`]: the cell coordinate type and neighbor enumeration
//! - [`is_solvable`] / [`count_inversions`]: the inversion-parity
//!   solvability test
//! - [`successors`]: enumeration of the boards reachable by sliding one tile
//!
//! Boards are immutable value types: every transformation produces a new
//! [`Board`], so search branches never alias each other's state.
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Board, Position, is_solvable, successors};
//!
//! let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]])?;
//!
//! assert_eq!(board.blank_position(), Position::new(1, 2));
//! assert!(is_solvable(&board));
//!
//! // The blank has three orthogonal neighbors here, so three moves exist.
//! assert_eq!(successors(&board).len(), 3);
//! # Ok::<(), taquin_core::BoardError>(())
//! ```

pub use self::{board::*, moves::*, position::*, solvability::*};

mod board;
mod moves;
mod position;
mod solvability;
