//! Distance transform benchmark: brute force vs ordered-set search
//!
//! Every cell of a 1000x1000 grid queries the minimum squared distance to a set of
//! ~1000 random points. Each strategy prints its total time; the checksums must match.
//!
//! ```bash
//! cargo bench --bench nearest_bench
//! ```

use sortnn::BenchConfig;
use sortnn::harness::run_suite;

fn main() {
    println!("Nearest Neighbor Benchmark");
    println!("==========================\n");

    let config = BenchConfig::default();
    let points = config.points();
    let grid = config.grid();

    println!("the number of unique test points N = {}", points.len());
    println!(
        "query grid {}x{} = {} queries\n",
        grid.width(),
        grid.height(),
        grid.len()
    );

    let measurements = run_suite(grid, &points);
    for m in &measurements {
        println!("{}", m);
        println!(
            "    {:>10.4}µs/query, checksum {}",
            m.micros_per_query(),
            m.checksum.value()
        );
    }

    let baseline = &measurements[0];
    for m in &measurements[1..] {
        if m.checksum != baseline.checksum {
            println!("MISMATCH: {} disagrees with {}", m.label, baseline.label);
        }
    }
}
