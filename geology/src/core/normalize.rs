//! Coordinate normalization.
//!
//! Negative coordinates are corrected to their absolute value rather than
//! rejected, and reversed endpoints are swapped.

use crate::core::types::Interval;

/// Canonicalize a raw `(a, b)` pair into an ordered, non-negative interval.
///
/// Coordinates beyond `usize::MAX` saturate; the bounds check rejects them.
pub fn normalize(a: i64, b: i64) -> Interval {
    Interval::ordered(magnitude(a), magnitude(b))
}

/// True if either coordinate needs sign correction.
pub fn has_negative(a: i64, b: i64) -> bool {
    a < 0 || b < 0
}

/// Absolute value of `value` as an index. `i64::MIN` does not overflow.
pub fn magnitude(value: i64) -> usize {
    usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX)
}
