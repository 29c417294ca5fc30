//! Folds an ordered list of steps over a flat landscape.

use crate::core::normalize::normalize;
use crate::core::transform::apply;
use crate::core::types::{Landscape, Step};

/// Simulate `steps` in order over `point_count` flat points.
///
/// Order matters: overlapping operations accumulate.
///
/// # Panics
/// Panics if a normalized step reaches past `point_count`. Run
/// [`crate::core::preconditions::check_bounds`] first.
pub fn simulate(point_count: usize, steps: &[Step]) -> Landscape {
    let mut landscape = Landscape::flat(point_count);
    for step in steps {
        let interval = normalize(step.x1, step.x2);
        apply(landscape.heights_mut(), step.operation, interval);
    }
    landscape
}
