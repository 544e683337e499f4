//! # timings
//!
//! Runs both kernels over a random input of the given size and prints the kernel time next to a
//! naive baseline. All numbers are in milliseconds.
//!
//! ## Usage
//!
//! ```
//! cargo run --release --example timings --features=bench -- 1600
//! ```
//!
//!  - `1600` is the number of elements (default 1600)
//!  - `RUST_LOG=scansort=trace` shows every radix pass

use scansort::test_utils::gen_inputs;
use scansort::{prefix_sum, radix_sort};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let size: usize = match std::env::args().nth(1).map(|s| s.parse()) {
        None => 1600,
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            eprintln!("invalid size: {}", e);
            std::process::exit(2);
        }
    };

    let inputs = gen_inputs(size, 0);

    let summed = match prefix_sum(&inputs) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("prefix_sum failed: {}", e);
            std::process::exit(1);
        }
    };

    let time = Instant::now();
    let baseline: Vec<i32> = inputs
        .iter()
        .scan(0i32, |acc, v| {
            *acc = acc.wrapping_add(*v);
            Some(*acc)
        })
        .collect();
    let baseline_ms = time.elapsed().as_secs_f64() * 1000.0;
    assert_eq!(baseline, summed.result);

    println!("prefix_sum,{},{:.4},{:.4}", size, summed.elapsed_ms, baseline_ms);

    let sorted = match radix_sort(&inputs) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("radix_sort failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut baseline = inputs.clone();
    let time = Instant::now();
    baseline.sort_unstable_by_key(|v| *v as u32);
    let baseline_ms = time.elapsed().as_secs_f64() * 1000.0;
    assert_eq!(baseline, sorted.result);

    println!("radix_sort,{},{:.4},{:.4}", size, sorted.elapsed_ms, baseline_ms);
}
