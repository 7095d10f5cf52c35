//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use sortnn::prelude::*;
//! ```

pub use crate::{
    BinarySearchLowerBound, Distance, INFINITE_DISTANCE, LowerBoundFinder, MemberLowerBound,
    OrderedPoints, Point, is_strictly_sorted, min_distance_brute_force, min_distance_ordered_set,
    nearest_brute_force, nearest_ordered_set, squared_distance,
};
