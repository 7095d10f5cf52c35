//! Nearest neighbor searches.
//!
//! [`min_distance_brute_force`] checks every point and serves as the reference.
//! [`min_distance_ordered_set`] starts at the lower bound of the query and expands in
//! both directions, stopping each side as soon as the squared x gap alone exceeds the
//! best squared distance found so far. Every point further along that side has an even
//! larger x gap, so none of them can be closer.
//!
//! For roughly uniform point sets the number of points inside the stripe around the
//! query grows with the square root of N, giving O(sqrt(N)) on average. The worst case
//! (for example all points sharing one x coordinate) stays O(N).

use std::borrow::Borrow;

use crate::lower_bound::LowerBoundFinder;
use crate::ordered::OrderedPoints;
use crate::point::{Distance, INFINITE_DISTANCE, Point, squared_distance, x_gap_squared};

/// Best candidate seen so far during a search
#[derive(Clone, Copy, Debug)]
struct Best {
    point: Option<Point>,
    distance: Distance,
    /// Points whose distance was computed
    visited: usize,
}

impl Best {
    fn new() -> Self {
        Self {
            point: None,
            distance: INFINITE_DISTANCE,
            visited: 0,
        }
    }

    #[inline]
    fn consider(&mut self, candidate: Point, distance: Distance) {
        self.visited += 1;
        if distance < self.distance || self.point.is_none() {
            self.distance = distance;
            self.point = Some(candidate);
        }
    }

    fn into_nearest(self) -> Option<(Point, Distance)> {
        self.point.map(|point| (point, self.distance))
    }
}

/// Visits points in walk order until the x gap exceeds the best distance.
///
/// Returns the number of points visited.
fn expand(query: Point, walk: impl Iterator<Item = Point>, best: &mut Best) -> usize {
    let mut visited = 0;
    for point in walk {
        visited += 1;
        best.consider(point, squared_distance(point, query));
        if x_gap_squared(point, query) > best.distance {
            break;
        }
    }
    visited
}

/// Expands from `from` toward the end. Does nothing if `from` is the end.
fn find_forward<C>(points: &C, from: C::Position, query: Point, best: &mut Best) -> usize
where
    C: OrderedPoints + ?Sized,
{
    if from == points.end() {
        return 0;
    }
    expand(query, points.walk_forward(from), best)
}

/// Expands from the element before `before` toward the beginning.
///
/// Stepping back from the first position would read before the collection, so that
/// case, which includes every empty collection, returns immediately.
fn find_backward<C>(points: &C, before: C::Position, query: Point, best: &mut Best) -> usize
where
    C: OrderedPoints + ?Sized,
{
    if before == points.begin() {
        return 0;
    }
    expand(query, points.walk_backward(before), best)
}

fn search_ordered_set<C, F>(points: &C, find_lower_bound: &F, query: Point) -> Best
where
    C: OrderedPoints + ?Sized,
    F: LowerBoundFinder<C> + ?Sized,
{
    let mut best = Best::new();
    let start = find_lower_bound.lower_bound(points, query);

    let forward = find_forward(points, start, query, &mut best);
    let backward = find_backward(points, start, query, &mut best);
    debug_assert_eq!(forward + backward, best.visited, "walks and candidates disagree");

    best
}

fn search_brute_force<I>(query: Point, points: I) -> Best
where
    I: IntoIterator,
    I::Item: Borrow<Point>,
{
    let mut best = Best::new();
    for point in points {
        let point = *point.borrow();
        best.consider(point, squared_distance(query, point));
    }
    best
}

/// Minimum squared distance from `query` to any point, by checking all of them.
///
/// `points` may be in any order and may contain duplicates. Returns
/// [`INFINITE_DISTANCE`] when `points` is empty.
///
/// # Example
/// ```
/// use sortnn::{Point, min_distance_brute_force};
/// let points = [Point::new(5, 5), Point::new(0, 0), Point::new(2, 0)];
/// assert_eq!(min_distance_brute_force(Point::new(2, 1), &points), 1);
/// ```
pub fn min_distance_brute_force<I>(query: Point, points: I) -> Distance
where
    I: IntoIterator,
    I::Item: Borrow<Point>,
{
    search_brute_force(query, points).distance
}

/// Minimum squared distance from `query` to any point of an ordered collection.
///
/// `points` must be sorted and free of duplicates, and `find_lower_bound` must agree
/// with that order. The collection is only read. Returns [`INFINITE_DISTANCE`] when
/// `points` is empty.
///
/// Pair [`BinarySearchLowerBound`](crate::BinarySearchLowerBound) with a random access
/// container to get the O(sqrt(N)) average cost.
///
/// # Example
/// ```
/// use sortnn::{BinarySearchLowerBound, Point, min_distance_ordered_set};
/// let points = vec![Point::new(0, 0), Point::new(2, 0), Point::new(2, 2), Point::new(5, 5)];
/// assert_eq!(min_distance_ordered_set(&points, &BinarySearchLowerBound, Point::new(2, 1)), 1);
/// assert_eq!(min_distance_ordered_set(&points, &BinarySearchLowerBound, Point::new(10, 10)), 50);
/// ```
pub fn min_distance_ordered_set<C, F>(points: &C, find_lower_bound: &F, query: Point) -> Distance
where
    C: OrderedPoints + ?Sized,
    F: LowerBoundFinder<C> + ?Sized,
{
    search_ordered_set(points, find_lower_bound, query).distance
}

/// Nearest point and its squared distance, by checking all points.
///
/// On ties the first point in iteration order wins. Returns `None` when `points` is
/// empty.
pub fn nearest_brute_force<I>(query: Point, points: I) -> Option<(Point, Distance)>
where
    I: IntoIterator,
    I::Item: Borrow<Point>,
{
    search_brute_force(query, points).into_nearest()
}

/// Nearest point and its squared distance in an ordered collection.
///
/// Same preconditions as [`min_distance_ordered_set`]. Among equally distant points
/// any one may be returned. Returns `None` when `points` is empty.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use sortnn::{MemberLowerBound, Point, nearest_ordered_set};
///
/// let set: BTreeSet<Point> = [(0, 0), (5, 5)].into_iter().map(Point::from).collect();
/// assert_eq!(
///     nearest_ordered_set(&set, &MemberLowerBound, Point::new(4, 3)),
///     Some((Point::new(5, 5), 5))
/// );
/// assert_eq!(nearest_ordered_set(&BTreeSet::<Point>::new(), &MemberLowerBound, Point::new(4, 3)), None);
/// ```
pub fn nearest_ordered_set<C, F>(
    points: &C,
    find_lower_bound: &F,
    query: Point,
) -> Option<(Point, Distance)>
where
    C: OrderedPoints + ?Sized,
    F: LowerBoundFinder<C> + ?Sized,
{
    search_ordered_set(points, find_lower_bound, query).into_nearest()
}
