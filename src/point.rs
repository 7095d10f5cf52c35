//! Two dimensional integer points and exact squared distances.
//!
//! Coordinates are `i32` and distances are squared so that every comparison made by
//! the searches is an exact integer comparison. No floating point is involved.

/// Squared distance between two points.
///
/// 128 bits hold the squared distance of any two `i32` points exactly: each axis
/// contributes at most `(2^32 - 1)^2`.
pub type Distance = u128;

/// Returned by the distance searches when the collection is empty.
///
/// Larger than the squared distance of any pair of points.
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// A two dimensional point with integer coordinates.
///
/// Points are ordered lexicographically: first by `x`, then by `y`. The derived
/// `Ord` relies on the field declaration order below.
///
/// # Example
/// ```
/// use sortnn::Point;
/// let a = Point::new(1, 5);
/// let b = Point::new(2, 0);
/// assert!(a < b);
/// assert!(Point::new(1, 4) < a);
/// assert_eq!(Point::default(), Point::new(0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a point at `(x, y)`
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate
    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the y coordinate
    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Squared difference of two coordinates
#[inline]
fn axis_squared(a: i32, b: i32) -> Distance {
    let d = Distance::from((i64::from(b) - i64::from(a)).unsigned_abs());
    d * d
}

/// Returns `(b.x - a.x)^2 + (b.y - a.y)^2`, exact for any pair of points.
///
/// # Example
/// ```
/// use sortnn::{Point, squared_distance};
/// assert_eq!(squared_distance(Point::new(0, 0), Point::new(3, 4)), 25);
/// assert_eq!(squared_distance(Point::new(3, 4), Point::new(0, 0)), 25);
/// ```
#[inline]
pub fn squared_distance(a: Point, b: Point) -> Distance {
    axis_squared(a.x, b.x) + axis_squared(a.y, b.y)
}

/// Squared horizontal gap between two points.
///
/// Never larger than [`squared_distance`] for the same pair, which is what makes it
/// a valid pruning bound.
#[inline]
pub fn x_gap_squared(a: Point, b: Point) -> Distance {
    axis_squared(a.x, b.x)
}
