//! Lower bound strategies.
//!
//! The ordered-set search only needs one primitive from its container: the position of
//! the first element that is not less than the query. How that position is found
//! decides the complexity of the whole search, so it is a pluggable strategy:
//!
//! - [`MemberLowerBound`] asks the container itself (for example `BTreeSet::range`).
//! - [`BinarySearchLowerBound`] runs a binary search over any container with cheap
//!   random access (`[Point]`, `Vec<Point>`, `VecDeque<Point>`).
//!
//! A strategy that a container cannot support is rejected at compile time: there is
//! no `BinarySearchLowerBound` for `BTreeSet` and no `MemberLowerBound` for `Vec`.

use std::collections::{BTreeSet, VecDeque};

use crate::ordered::OrderedPoints;
use crate::point::Point;

/// Finds the first position in `points` whose element is not less than `query`.
///
/// Implementations must return `points.end()` when every element is less than
/// `query`.
pub trait LowerBoundFinder<C: OrderedPoints + ?Sized> {
    /// Position of the first element of `points` that is not less than `query`
    fn lower_bound(&self, points: &C, query: Point) -> C::Position;
}

/// Containers that can locate a lower bound on their own
pub trait NativeLowerBound: OrderedPoints {
    /// Position of the first element that is not less than `query`, found by the
    /// container's own search
    fn native_lower_bound(&self, query: Point) -> Self::Position;
}

/// Containers with constant time access to the element at an index
pub trait RandomAccessPoints: OrderedPoints<Position = usize> {
    /// Number of stored points
    fn point_count(&self) -> usize;

    /// Point at `index`; `index` is always below `point_count()`
    fn point_at(&self, index: usize) -> Point;
}

impl NativeLowerBound for BTreeSet<Point> {
    #[inline]
    fn native_lower_bound(&self, query: Point) -> Option<Point> {
        self.range(query..).next().copied()
    }
}

impl RandomAccessPoints for [Point] {
    #[inline]
    fn point_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self[index]
    }
}

impl RandomAccessPoints for Vec<Point> {
    #[inline]
    fn point_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self[index]
    }
}

impl RandomAccessPoints for VecDeque<Point> {
    #[inline]
    fn point_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self[index]
    }
}

/// Delegates to the container's own ordered search.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use sortnn::{LowerBoundFinder, MemberLowerBound, Point};
///
/// let set: BTreeSet<Point> = [(0, 0), (2, 0), (2, 2)].into_iter().map(Point::from).collect();
/// assert_eq!(MemberLowerBound.lower_bound(&set, Point::new(2, 1)), Some(Point::new(2, 2)));
/// assert_eq!(MemberLowerBound.lower_bound(&set, Point::new(9, 9)), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MemberLowerBound;

impl<C: NativeLowerBound + ?Sized> LowerBoundFinder<C> for MemberLowerBound {
    #[inline]
    fn lower_bound(&self, points: &C, query: Point) -> C::Position {
        points.native_lower_bound(query)
    }
}

/// Binary search over a random access container, O(log N).
///
/// # Example
/// ```
/// use sortnn::{BinarySearchLowerBound, LowerBoundFinder, Point};
///
/// let points = vec![Point::new(0, 0), Point::new(2, 0), Point::new(2, 2)];
/// assert_eq!(BinarySearchLowerBound.lower_bound(&points, Point::new(2, 0)), 1);
/// assert_eq!(BinarySearchLowerBound.lower_bound(&points, Point::new(2, 1)), 2);
/// assert_eq!(BinarySearchLowerBound.lower_bound(&points, Point::new(3, 0)), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearchLowerBound;

impl<C: RandomAccessPoints + ?Sized> LowerBoundFinder<C> for BinarySearchLowerBound {
    fn lower_bound(&self, points: &C, query: Point) -> usize {
        let mut first = 0;
        let mut count = points.point_count();

        while count > 0 {
            let step = count / 2;
            let mid = first + step;
            if points.point_at(mid) < query {
                first = mid + 1;
                count -= step + 1;
            } else {
                count = step;
            }
        }

        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 2),
            Point::new(5, 5),
        ]
    }

    #[test]
    fn test_binary_search_matches_partition_point() {
        let points = sample();
        for x in -1..7 {
            for y in -1..7 {
                let query = Point::new(x, y);
                let expected = points.partition_point(|p| *p < query);
                assert_eq!(
                    BinarySearchLowerBound.lower_bound(&points, query),
                    expected,
                    "query {:?}",
                    query
                );
                assert_eq!(
                    BinarySearchLowerBound.lower_bound(points.as_slice(), query),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_binary_search_on_deque() {
        let deque: VecDeque<Point> = sample().into_iter().collect();
        assert_eq!(BinarySearchLowerBound.lower_bound(&deque, Point::new(-5, 0)), 0);
        assert_eq!(BinarySearchLowerBound.lower_bound(&deque, Point::new(2, 2)), 2);
        assert_eq!(BinarySearchLowerBound.lower_bound(&deque, Point::new(5, 6)), 4);
    }

    #[test]
    fn test_member_lower_bound_agrees_with_binary_search() {
        let points = sample();
        let set: BTreeSet<Point> = points.iter().copied().collect();
        for x in -1..7 {
            for y in -1..7 {
                let query = Point::new(x, y);
                let index = BinarySearchLowerBound.lower_bound(&points, query);
                let found = MemberLowerBound.lower_bound(&set, query);
                assert_eq!(found, points.get(index).copied());
            }
        }
    }

    #[test]
    fn test_empty_containers() {
        let empty: Vec<Point> = Vec::new();
        assert_eq!(BinarySearchLowerBound.lower_bound(&empty, Point::new(1, 1)), 0);

        let set: BTreeSet<Point> = BTreeSet::new();
        assert_eq!(MemberLowerBound.lower_bound(&set, Point::new(1, 1)), None);
    }
}
