//! Benchmarks for scramble generation.
//!
//! Uses fixed seeds so every run samples the same rejection sequences.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench scramble
//! ```

use std::hint;
use std::str::FromStr as _;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use taquin_generator::{ScrambleSeed, Scrambler};

const SEEDS: [&str; 3] = [
    "6d1f3c3b8f0a5e2d9c4b7a6958473625141302f1e0d9c8b7a695847362514130",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_scramble(c: &mut Criterion) {
    let scrambler = Scrambler::new();
    for n in [3_u8, 4] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ScrambleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("scramble_{n}x{n}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter(|| scrambler.scramble_with_seed(n, hint::black_box(*seed)));
                },
            );
        }
    }
}

criterion_group!(benches, bench_scramble);
criterion_main!(benches);
