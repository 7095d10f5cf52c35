//! Parallel sweep benchmark
//!
//! Uses the same point set and grid as `nearest_bench.rs`. The sorted `Vec` is shared
//! read-only across threads through an `Arc`; every thread sweeps its own band of
//! grid columns with its own `DistanceSum`, and the partial sums are merged at the end.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use sortnn::harness::sweep_ordered_set;
use sortnn::{BenchConfig, BinarySearchLowerBound, DistanceSum};

fn main() {
    println!("Nearest Neighbor Parallel Benchmark (vs nearest_bench)");
    println!("=========================================================\n");

    let num_threads = thread::available_parallelism()
        .ok()
        .and_then(|n| i32::try_from(n.get()).ok())
        .unwrap_or(4);

    let config = BenchConfig::default();
    let grid = config.grid();
    let points = Arc::new(config.points());
    println!("the number of unique test points N = {}\n", points.len());

    let mut serial_sum = DistanceSum::new();
    let serial_start = Instant::now();
    sweep_ordered_set(grid.points(), points.as_slice(), &BinarySearchLowerBound, &mut serial_sum);
    let serial_time = serial_start.elapsed();
    println!("  1 thread:   {:>10.2}ms", serial_time.as_secs_f64() * 1000.0);

    let band = (grid.width() + num_threads - 1) / num_threads;
    let parallel_start = Instant::now();
    let handles: Vec<_> = (0..num_threads)
        .map(|i| {
            let points = Arc::clone(&points);
            thread::spawn(move || {
                let mut sum = DistanceSum::new();
                let columns = grid.columns(i * band..(i + 1) * band);
                sweep_ordered_set(columns, points.as_slice(), &BinarySearchLowerBound, &mut sum);
                sum
            })
        })
        .collect();

    let mut parallel_sum = DistanceSum::new();
    for handle in handles {
        match handle.join() {
            Ok(sum) => parallel_sum = parallel_sum.merge(sum),
            Err(_) => {
                println!("worker thread panicked");
                return;
            }
        }
    }
    let parallel_time = parallel_start.elapsed();

    println!(
        "  {} threads: {:>10.2}ms ({:.1}x)",
        num_threads,
        parallel_time.as_secs_f64() * 1000.0,
        serial_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::MIN_POSITIVE)
    );

    if parallel_sum == serial_sum {
        println!("\nchecksum {} matches", serial_sum.value());
    } else {
        println!(
            "\nMISMATCH: serial {} vs parallel {}",
            serial_sum.value(),
            parallel_sum.value()
        );
    }
}
