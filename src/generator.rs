//! Random test point sets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Fills `out` with up to `n` random points from `[0, width) x [0, height)`.
///
/// The result is sorted and contains no duplicates, so it can be handed to the
/// ordered-set search as is. Collisions make it shorter than `n`. A non-positive
/// `width` or `height` leaves `out` empty.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use sortnn::{generate_test_points, is_strictly_sorted};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut points = Vec::new();
/// generate_test_points(&mut rng, 100, 50, 500, &mut points);
///
/// assert!(points.len() <= 500);
/// assert!(is_strictly_sorted(&points));
/// assert!(points.iter().all(|p| (0..100).contains(&p.x()) && (0..50).contains(&p.y())));
/// ```
pub fn generate_test_points<R: Rng + ?Sized>(
    rng: &mut R,
    width: i32,
    height: i32,
    n: usize,
    out: &mut Vec<Point>,
) {
    out.clear();
    if width <= 0 || height <= 0 {
        return;
    }

    out.reserve(n);
    for _ in 0..n {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        out.push(Point::new(x, y));
    }

    out.sort_unstable();
    out.dedup();
}

/// Generates a reproducible point set from `seed`.
///
/// See [`generate_test_points`] for the guarantees on the result.
pub fn test_points(width: i32, height: i32, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n);
    generate_test_points(&mut rng, width, height, n, &mut points);
    points
}
