//! Ordered point collections.
//!
//! A collection usable by the ordered-set search must yield its points in strictly
//! increasing order (see [`Point`]'s ordering) and must be able to walk outward from a
//! position in both directions. The search never sorts or deduplicates on its own.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Bound;

use crate::point::Point;

/// A sorted, duplicate-free collection of points addressed by positions.
///
/// A position marks a place between elements the way a C++ iterator does: `begin()`
/// is the first element, `end()` is one past the last, and the two are equal for an
/// empty collection.
pub trait OrderedPoints {
    /// Marker for a place in the collection
    type Position: Copy + PartialEq;

    /// Position of the first element (equal to `end()` when empty)
    fn begin(&self) -> Self::Position;

    /// Position one past the last element
    fn end(&self) -> Self::Position;

    /// Points from `from` (inclusive) toward the end, in increasing order
    fn walk_forward(&self, from: Self::Position) -> impl Iterator<Item = Point> + '_;

    /// Points before `before` (exclusive) toward the beginning, in decreasing order
    fn walk_backward(&self, before: Self::Position) -> impl Iterator<Item = Point> + '_;
}

impl OrderedPoints for [Point] {
    type Position = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    fn walk_forward(&self, from: usize) -> impl Iterator<Item = Point> + '_ {
        self.get(from..).unwrap_or_default().iter().copied()
    }

    fn walk_backward(&self, before: usize) -> impl Iterator<Item = Point> + '_ {
        self.get(..before).unwrap_or(self).iter().rev().copied()
    }
}

impl OrderedPoints for Vec<Point> {
    type Position = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    fn walk_forward(&self, from: usize) -> impl Iterator<Item = Point> + '_ {
        self.as_slice().walk_forward(from)
    }

    fn walk_backward(&self, before: usize) -> impl Iterator<Item = Point> + '_ {
        self.as_slice().walk_backward(before)
    }
}

impl OrderedPoints for VecDeque<Point> {
    type Position = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    fn walk_forward(&self, from: usize) -> impl Iterator<Item = Point> + '_ {
        self.range(from.min(self.len())..).copied()
    }

    fn walk_backward(&self, before: usize) -> impl Iterator<Item = Point> + '_ {
        self.range(..before.min(self.len())).rev().copied()
    }
}

/// `BTreeSet` positions are the element they point at; `None` is the end.
impl OrderedPoints for BTreeSet<Point> {
    type Position = Option<Point>;

    #[inline]
    fn begin(&self) -> Option<Point> {
        self.first().copied()
    }

    #[inline]
    fn end(&self) -> Option<Point> {
        None
    }

    fn walk_forward(&self, from: Option<Point>) -> impl Iterator<Item = Point> + '_ {
        from.into_iter().flat_map(move |start| self.range(start..).copied())
    }

    fn walk_backward(&self, before: Option<Point>) -> impl Iterator<Item = Point> + '_ {
        let upper = before.map_or(Bound::Unbounded, Bound::Excluded);
        self.range((Bound::Unbounded, upper)).rev().copied()
    }
}

/// Returns true if `points` is strictly increasing, i.e. sorted with no duplicates.
///
/// # Example
/// ```
/// use sortnn::{Point, is_strictly_sorted};
/// assert!(is_strictly_sorted(&[Point::new(0, 0), Point::new(0, 1), Point::new(1, 0)]));
/// assert!(!is_strictly_sorted(&[Point::new(0, 1), Point::new(0, 1)]));
/// assert!(!is_strictly_sorted(&[Point::new(1, 0), Point::new(0, 9)]));
/// ```
pub fn is_strictly_sorted(points: &[Point]) -> bool {
    points.windows(2).all(|pair| pair[0] < pair[1])
}
