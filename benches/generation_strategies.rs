//! Benchmark suite for comparing report generation strategies
//!
//! This benchmark compares the bulk and streaming generators using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Inputs
//!
//! Inputs are generated in memory before timing starts: a JSON array of
//! transactions spread over 1,000 users and 8 categories, at three sizes.

use json_report_engine::strategy::Generator;
use std::fmt::Write;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 10_000, 1_000_000];

const CATEGORIES: [&str; 8] = [
    "food", "rent", "travel", "fuel", "health", "fun", "gifts", "",
];

/// Build a JSON array of `count` transactions
fn sample_input(count: usize) -> String {
    let mut input = String::with_capacity(count * 56 + 2);
    input.push('[');
    for i in 0..count {
        if i > 0 {
            input.push(',');
        }
        let user_id = (i * 7919) % 1000;
        let amount = (i % 500) as i64 - 100;
        let category = CATEGORIES[i % CATEGORIES.len()];
        write!(
            input,
            "\n  {{\"user_id\": {}, \"amount\": {}, \"category\": \"{}\"}}",
            user_id, amount, category
        )
        .expect("Writing to a String cannot fail");
    }
    input.push_str("\n]");
    input
}

/// Benchmark the bulk generator
#[divan::bench(args = SIZES)]
fn bulk_generator(bencher: divan::Bencher, count: usize) {
    let input = sample_input(count);
    bencher.bench_local(|| {
        Generator::Bulk
            .generate(input.as_bytes())
            .expect("Generation failed")
    });
}

/// Benchmark the streaming generator
#[divan::bench(args = SIZES)]
fn stream_generator(bencher: divan::Bencher, count: usize) {
    let input = sample_input(count);
    bencher.bench_local(|| {
        Generator::Stream
            .generate(input.as_bytes())
            .expect("Generation failed")
    });
}
