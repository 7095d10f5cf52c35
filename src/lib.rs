//! # sortnn - Nearest Neighbor Search in Ordered Point Sets
//!
//! A small Rust library that finds the squared distance from a query location to the
//! closest point of a set of 2D integer points, in O(sqrt(N)) time on average.
//!
//! ## Features
//!
//! - **Exact Integer Arithmetic**: `i32` coordinates and squared `u128` distances, no
//!   floating point tolerance anywhere
//! - **Pluggable Lower Bound**: the search is written against one operation,
//!   [`LowerBoundFinder`], so the container and its search primitive can be swapped
//! - **Standard Containers**: works on sorted `Vec`, slices and `VecDeque` (binary
//!   search) and on `BTreeSet` (member search)
//! - **Brute-Force Baseline**: a linear scan used as the correctness oracle
//! - **Benchmark Harness**: a distance transform style sweep over a query grid
//!
//! ## Quick Start
//!
//! ```rust
//! use sortnn::prelude::*;
//!
//! // Points must be sorted (by x, then y) and free of duplicates
//! let points = vec![
//!     Point::new(0, 0),
//!     Point::new(2, 0),
//!     Point::new(2, 2),
//!     Point::new(5, 5),
//! ];
//! assert!(is_strictly_sorted(&points));
//!
//! let query = Point::new(2, 1);
//! let fast = min_distance_ordered_set(&points, &BinarySearchLowerBound, query);
//! let slow = min_distance_brute_force(query, &points);
//! assert_eq!(fast, 1);
//! assert_eq!(fast, slow);
//! ```
//!
//! ## How It Works
//!
//! Points are kept in lexicographic order, so points with similar x coordinates are
//! neighbors in the collection. The search finds the lower bound of the query and
//! walks outward in both directions. A side stops as soon as the squared x gap of the
//! current point exceeds the best squared distance so far: the x gap alone is a lower
//! bound on the distance of every point further along that side.
//!
//! The lower bound step must be logarithmic to keep the whole search sub-linear, which
//! is why [`BinarySearchLowerBound`] requires random access.

pub mod generator;
pub mod harness;
pub mod lower_bound;
pub mod ordered;
pub mod point;
pub mod prelude;
pub mod search;


pub use generator::{generate_test_points, test_points};
pub use harness::{BenchConfig, DistanceSum, Measurement, QueryGrid};
pub use lower_bound::{
    BinarySearchLowerBound, LowerBoundFinder, MemberLowerBound, NativeLowerBound,
    RandomAccessPoints,
};
pub use ordered::{OrderedPoints, is_strictly_sorted};
pub use point::{Distance, INFINITE_DISTANCE, Point, squared_distance};
pub use search::{
    min_distance_brute_force, min_distance_ordered_set, nearest_brute_force,
    nearest_ordered_set,
};
