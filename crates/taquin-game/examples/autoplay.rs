//! Example that scrambles a board, solves it, and replays the solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Pick the board side (3 is the classic 8-puzzle; 4 and up can take a
//! very long time):
//!
//! ```sh
//! cargo run --example autoplay -- --size 3
//! ```
//!
//! Replay a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example autoplay -- --seed <64-hex-chars>
//! ```
//!
//! Bound the search instead of letting it run to completion:
//!
//! ```sh
//! cargo run --example autoplay -- --size 4 --max-expansions 1000000
//! ```

use std::process;

use clap::Parser;
use taquin_game::Game;
use taquin_generator::ScrambleSeed;
use taquin_solver::{ManhattanDistance, SearchLimits, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 3)]
    size: u8,

    /// Reproduce a specific scramble (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<ScrambleSeed>,

    /// Abort the search after this many state expansions.
    #[arg(long, value_name = "COUNT")]
    max_expansions: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(ScrambleSeed::random);
    let solver = Solver::with_limits(
        ManhattanDistance,
        SearchLimits {
            max_expansions: args.max_expansions,
        },
    );

    let mut game = match Game::with_solver(args.size, seed, &solver) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Turn 0:");
    println!("{}", game.board());

    loop {
        if game.advance().is_none() {
            break;
        }
        println!();
        println!("Turn {}:", game.turns());
        println!("{}", game.board());
    }

    println!();
    println!("Stats:");
    println!("  optimal moves: {}", game.optimal_moves());
    println!("  states expanded: {}", game.solution().expanded());
}
