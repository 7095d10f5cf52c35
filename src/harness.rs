//! Benchmark harness emulating a distance transform.
//!
//! Every cell of a `width x height` grid is used as a query against one point set and
//! the returned squared distances are summed. The sum is carried in an explicit
//! [`DistanceSum`] so the optimizer cannot drop the searches, and it doubles as a
//! checksum: every strategy must produce the same sum for the same point set.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

use crate::generator::test_points;
use crate::lower_bound::{BinarySearchLowerBound, LowerBoundFinder, MemberLowerBound};
use crate::ordered::{OrderedPoints, is_strictly_sorted};
use crate::point::{Distance, Point};
use crate::search::{min_distance_brute_force, min_distance_ordered_set};

const DEFAULT_WIDTH: i32 = 1000;
const DEFAULT_HEIGHT: i32 = 1000;
const DEFAULT_NUM_POINTS: usize = 1000;
const DEFAULT_SEED: u64 = 95756739;

/// Parameters of one benchmark run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Width of the rectangle holding points and queries
    pub width: i32,
    /// Height of the rectangle holding points and queries
    pub height: i32,
    /// Requested number of points (before deduplication)
    pub num_points: usize,
    /// Seed for the point generator
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_points: DEFAULT_NUM_POINTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Query grid covering the rectangle
    pub fn grid(&self) -> QueryGrid {
        QueryGrid::new(self.width, self.height)
    }

    /// Sorted, deduplicated point set for this configuration
    pub fn points(&self) -> Vec<Point> {
        test_points(self.width, self.height, self.num_points, self.seed)
    }
}

/// All integer points `(x, y)` with `0 <= x < width` and `0 <= y < height`.
///
/// Never materialized; iterate it with [`QueryGrid::points`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryGrid {
    width: i32,
    height: i32,
}

impl QueryGrid {
    /// Grid of `width x height` queries; non-positive sizes give an empty grid
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of columns
    pub fn width(self) -> i32 {
        self.width
    }

    /// Number of query points per column
    pub fn height(self) -> i32 {
        self.height
    }

    /// Number of query points
    pub fn len(self) -> usize {
        let width = usize::try_from(self.width).unwrap_or(0);
        let height = usize::try_from(self.height).unwrap_or(0);
        width * height
    }

    /// True when the grid has no query points
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Query points column by column: x outer, y inner
    pub fn points(self) -> impl Iterator<Item = Point> + use<> {
        self.columns(0..self.width)
    }

    /// Query points of the columns in `xs`, clipped to the grid
    pub fn columns(self, xs: Range<i32>) -> impl Iterator<Item = Point> + use<> {
        let height = self.height;
        let xs = xs.start.max(0)..xs.end.min(self.width);
        xs.flat_map(move |x| (0..height).map(move |y| Point::new(x, y)))
    }
}

/// Running sum of search results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistanceSum(Distance);

impl DistanceSum {
    /// Empty sum
    pub fn new() -> Self {
        Self(0)
    }

    /// Adds one result, wrapping on overflow
    #[inline]
    pub fn add(&mut self, distance: Distance) {
        self.0 = self.0.wrapping_add(distance);
    }

    /// Combines sums computed over disjoint parts of a grid
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Current total
    pub fn value(&self) -> Distance {
        self.0
    }
}

/// Timing of one full grid sweep
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Strategy and container that were timed
    pub label: String,
    /// Wall clock time of the sweep
    pub elapsed: Duration,
    /// Number of queries in the sweep
    pub queries: usize,
    /// Sum of all returned distances
    pub checksum: DistanceSum,
}

impl Measurement {
    /// Elapsed time in microseconds
    pub fn micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }

    /// Average time per query in microseconds
    pub fn micros_per_query(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.micros() / self.queries as f64
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " T = {:.0} mcs ; {};", self.micros(), self.label)
    }
}

/// Runs the brute-force search for every query of `queries`, adding into `sum`
pub fn sweep_brute_force<C>(queries: impl Iterator<Item = Point>, points: &C, sum: &mut DistanceSum)
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a Point>,
{
    for query in queries {
        sum.add(min_distance_brute_force(query, points));
    }
}

/// Runs the ordered-set search for every query of `queries`, adding into `sum`
pub fn sweep_ordered_set<C, F>(
    queries: impl Iterator<Item = Point>,
    points: &C,
    find_lower_bound: &F,
    sum: &mut DistanceSum,
) where
    C: OrderedPoints + ?Sized,
    F: LowerBoundFinder<C> + ?Sized,
{
    for query in queries {
        sum.add(min_distance_ordered_set(points, find_lower_bound, query));
    }
}

/// Builds a `C` from `point_set` and times a brute-force sweep of `grid`.
///
/// Building the container is not part of the measured time.
pub fn measure_brute_force<C>(label: &str, grid: QueryGrid, point_set: &[Point]) -> Measurement
where
    C: FromIterator<Point>,
    for<'a> &'a C: IntoIterator<Item = &'a Point>,
{
    let points: C = point_set.iter().copied().collect();
    let mut sum = DistanceSum::new();

    let start = Instant::now();
    sweep_brute_force(grid.points(), &points, &mut sum);
    let elapsed = start.elapsed();

    Measurement {
        label: label.to_string(),
        elapsed,
        queries: grid.len(),
        checksum: sum,
    }
}

/// Builds a `C` from `point_set` and times an ordered-set sweep of `grid`.
///
/// `point_set` must be sorted and duplicate free when `C` keeps insertion order.
///
/// # Panics
///
/// In debug builds, panics if `point_set` is not strictly sorted.
pub fn measure_ordered_set<C, F>(
    label: &str,
    grid: QueryGrid,
    point_set: &[Point],
    find_lower_bound: F,
) -> Measurement
where
    C: OrderedPoints + FromIterator<Point>,
    F: LowerBoundFinder<C>,
{
    debug_assert!(is_strictly_sorted(point_set), "point set is not strictly sorted");
    let points: C = point_set.iter().copied().collect();
    let mut sum = DistanceSum::new();

    let start = Instant::now();
    sweep_ordered_set(grid.points(), &points, &find_lower_bound, &mut sum);
    let elapsed = start.elapsed();

    Measurement {
        label: label.to_string(),
        elapsed,
        queries: grid.len(),
        checksum: sum,
    }
}

/// Runs the standard suite on `point_set`: brute force on a `Vec`, then the
/// ordered-set search on `Vec` and `VecDeque` (binary search) and on `BTreeSet`
/// (member search).
pub fn run_suite(grid: QueryGrid, point_set: &[Point]) -> Vec<Measurement> {
    vec![
        measure_brute_force::<Vec<Point>>("brute force algorithm, Vec", grid, point_set),
        measure_ordered_set::<Vec<Point>, _>(
            "ordered set algorithm, Vec + binary search",
            grid,
            point_set,
            BinarySearchLowerBound,
        ),
        measure_ordered_set::<VecDeque<Point>, _>(
            "ordered set algorithm, VecDeque + binary search",
            grid,
            point_set,
            BinarySearchLowerBound,
        ),
        measure_ordered_set::<BTreeSet<Point>, _>(
            "ordered set algorithm, BTreeSet + member search",
            grid,
            point_set,
            MemberLowerBound,
        ),
    ]
}

/// Generates the point set described by `config` and runs [`run_suite`] on it
pub fn run_all(config: &BenchConfig) -> Vec<Measurement> {
    run_suite(config.grid(), &config.points())
}
