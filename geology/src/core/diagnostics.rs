//! Correction notices recorded while normalizing input.
//!
//! Corrections are not errors: processing continues with the corrected
//! value. Each notice is kept in a [`Diagnostics`] list owned by the caller and
//! mirrored to `tracing` at `warn` level.

use std::fmt;

use tracing::warn;

use crate::core::normalize::has_negative;
use crate::core::types::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A negative point count was replaced by its absolute value.
    NegativePointCount { value: i64 },
    /// A modification had a negative coordinate; both were absolute-valued.
    NegativeCoordinate { index: usize, x1: i64, x2: i64 },
    /// The declared point count disagreed with the expected heights.
    PointCountReconciled { declared: i64, effective: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NegativePointCount { value } => {
                write!(f, "point count {value} is negative; using {}", value.unsigned_abs())
            }
            Diagnostic::NegativeCoordinate { index, x1, x2 } => write!(
                f,
                "modifications[{index}] has negative coordinates ({x1}, {x2}); using ({}, {})",
                x1.unsigned_abs(),
                x2.unsigned_abs()
            ),
            Diagnostic::PointCountReconciled {
                declared,
                effective,
            } => write!(
                f,
                "point count {declared} differs from expected heights length; using {effective}"
            ),
        }
    }
}

/// Append-only list of correction notices for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "input corrected");
        self.entries.push(diagnostic);
    }

    /// Note every step with a negative coordinate, by position in `steps`.
    pub fn record_negative_coordinates(&mut self, steps: &[Step]) {
        for (index, step) in steps.iter().enumerate() {
            if has_negative(step.x1, step.x2) {
                self.record(Diagnostic::NegativeCoordinate {
                    index,
                    x1: step.x1,
                    x2: step.x2,
                });
            }
        }
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
