//! Uniformly random solvable scramble generation.
//!
//! A scramble is a uniformly random solvable arrangement of an N×N board,
//! produced by rejection sampling: shuffle the labels, keep the first
//! permutation the solvability test accepts. Exactly half of all
//! permutations are solvable, so the expected number of attempts is 2; a
//! retry ceiling keeps the defensive failure path observable instead of
//! looping forever on a bug.
//!
//! Every scramble records the [`ScrambleSeed`] that produced it, so any run
//! can be reproduced from its printed seed.
//!
//! # Examples
//!
//! ```
//! use taquin_core::is_solvable;
//! use taquin_generator::Scrambler;
//!
//! let scramble = Scrambler::new().scramble(3)?;
//! assert_eq!(scramble.board.size(), 3);
//! assert!(is_solvable(&scramble.board));
//!
//! // The same seed always reproduces the same board.
//! let replay = Scrambler::new().scramble_with_seed(3, scramble.seed)?;
//! assert_eq!(replay.board, scramble.board);
//! # Ok::<(), taquin_generator::ScrambleError>(())
//! ```

pub use self::seed::*;

mod seed;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom as _;
use taquin_core::{Board, BoardError, is_solvable};

/// Default ceiling on rejection-sampling attempts.
///
/// With an expected 2 attempts per scramble, reaching this bound means the
/// random source or the solvability test is broken.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Errors produced while generating a scramble.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ScrambleError {
    /// The requested board could not be formed.
    #[display("cannot scramble: {_0}")]
    Board(#[from] BoardError),
    /// No solvable arrangement was found within the attempt ceiling.
    #[display("no solvable arrangement found after {attempts} attempts")]
    Exhausted {
        /// Number of shuffles tried.
        attempts: usize,
    },
}

/// A generated scramble together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// The uniformly random solvable board.
    pub board: Board,
    /// The seed that reproduces this board.
    pub seed: ScrambleSeed,
}

/// Generates uniformly random solvable boards by rejection sampling.
///
/// # Examples
///
/// ```
/// use taquin_generator::{ScrambleSeed, Scrambler};
///
/// let scrambler = Scrambler::new();
/// let seed = ScrambleSeed::from_bytes([1; 32]);
///
/// let a = scrambler.scramble_with_seed(4, seed)?;
/// let b = scrambler.scramble_with_seed(4, seed)?;
/// assert_eq!(a, b);
/// # Ok::<(), taquin_generator::ScrambleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrambler {
    max_attempts: usize,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    /// Creates a scrambler with the [default attempt ceiling](DEFAULT_MAX_ATTEMPTS).
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a scrambler with a custom attempt ceiling.
    #[must_use]
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Returns the configured attempt ceiling.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a scramble of side `n` from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`ScrambleError::Board`] when `n` is outside the supported
    /// range, or [`ScrambleError::Exhausted`] if no solvable arrangement
    /// turns up within the attempt ceiling.
    pub fn scramble(&self, n: u8) -> Result<Scramble, ScrambleError> {
        self.scramble_with_seed(n, ScrambleSeed::random())
    }

    /// Generates the scramble of side `n` determined by `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`scramble`](Self::scramble).
    pub fn scramble_with_seed(
        &self,
        n: u8,
        seed: ScrambleSeed,
    ) -> Result<Scramble, ScrambleError> {
        let mut rng = seed.rng();
        let board = self.scramble_with_rng(n, &mut rng)?;
        Ok(Scramble { board, seed })
    }

    /// Generates a scramble of side `n` from a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Same as [`scramble`](Self::scramble).
    pub fn scramble_with_rng<R: Rng + ?Sized>(
        &self,
        n: u8,
        rng: &mut R,
    ) -> Result<Board, ScrambleError> {
        let mut tiles = Board::goal_of_size(n)?.tiles().to_vec();
        for attempt in 1..=self.max_attempts {
            tiles.shuffle(rng);
            let board = Board::from_tiles(tiles.clone())?;
            if is_solvable(&board) {
                debug!("accepted {n}x{n} scramble on attempt {attempt}");
                return Ok(board);
            }
        }
        Err(ScrambleError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}
