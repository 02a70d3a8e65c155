//! Benchmarks for crossword layout construction.
//!
//! # Benchmarks
//!
//! - **`placement/demo`**: Builds a layout from the short demo word list on the
//!   default 20×20 grid.
//! - **`placement/dense`**: Builds a layout from a longer list that shares many
//!   letters, so most words produce long intersection candidate lists.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench placement
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crossword_builder::CrosswordBuilder;

const DEMO_WORDS: [&str; 5] = ["Gomogay", "Morgen", "Africa", "Gomontron", "Knopochka"];

const DENSE_WORDS: [&str; 16] = [
    "rustacean",
    "borrow",
    "lifetime",
    "trait",
    "generic",
    "closure",
    "iterator",
    "module",
    "crate",
    "macro",
    "pattern",
    "ownership",
    "reference",
    "compiler",
    "runtime",
    "allocator",
];

fn build(words: &[&str]) -> CrosswordBuilder {
    let mut builder = CrosswordBuilder::default();
    for word in words {
        let _ = builder.add_word(word);
    }
    builder
}

fn bench_placement(c: &mut Criterion) {
    let cases: [(&str, &[&str]); 2] = [("demo", &DEMO_WORDS), ("dense", &DENSE_WORDS)];
    for (name, words) in cases {
        c.bench_with_input(BenchmarkId::new("placement", name), &words, |b, words| {
            b.iter_batched(|| hint::black_box(*words), build, BatchSize::SmallInput);
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets = bench_placement
);
criterion_main!(benches);
