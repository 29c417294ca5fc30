//! Range transforms over an inclusive index interval.
//!
//! Every transform requires `interval.hi() < heights.len()`. Callers establish
//! this with [`crate::core::preconditions::check_bounds`].

use crate::core::types::{Interval, OperationKind};

/// Apply `operation` to `heights` over `interval`.
pub fn apply(heights: &mut [i64], operation: OperationKind, interval: Interval) {
    match operation {
        OperationKind::Raise => raise(heights, interval),
        OperationKind::Depress => depress(heights, interval),
        OperationKind::Hill => hill(heights, interval),
        OperationKind::Valley => valley(heights, interval),
    }
}

/// Add 1 to every height in `interval`.
pub fn raise(heights: &mut [i64], interval: Interval) {
    shift(heights, interval.lo(), interval.hi(), 1);
}

/// Subtract 1 from every height in `interval`.
pub fn depress(heights: &mut [i64], interval: Interval) {
    shift(heights, interval.lo(), interval.hi(), -1);
}

/// Raise a shrinking interval until its endpoints are at most one apart.
///
/// `[1, 7]` raises `[1,7]`, `[2,6]` and `[3,5]`, giving `0 1 2 3 3 3 2 1`.
/// An interval with `hi - lo <= 1` is left untouched.
pub fn hill(heights: &mut [i64], interval: Interval) {
    pyramid(heights, interval, 1);
}

/// Mirror of [`hill`]: depress a shrinking interval.
pub fn valley(heights: &mut [i64], interval: Interval) {
    pyramid(heights, interval, -1);
}

fn pyramid(heights: &mut [i64], interval: Interval, delta: i64) {
    let (mut lo, mut hi) = (interval.lo(), interval.hi());
    while hi - lo > 1 {
        shift(heights, lo, hi, delta);
        lo += 1;
        hi -= 1;
    }
}

fn shift(heights: &mut [i64], lo: usize, hi: usize, delta: i64) {
    for height in &mut heights[lo..=hi] {
        *height = height.saturating_add(delta);
    }
}
