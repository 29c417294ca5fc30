//! Validation subject: checks a claimed landscape against its operations.

use std::fmt;

use tracing::debug;

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::normalize::magnitude;
use crate::core::preconditions::{InvalidArgument, check_bounds, check_input};
use crate::core::simulate::simulate;
use crate::core::types::{Landscape, Modification};

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True iff the simulated landscape equals the expected heights.
    pub valid: bool,
    /// Point count actually simulated (always the expected heights length).
    pub effective_point_count: usize,
    pub landscape: Landscape,
    /// Corrections applied to this call's input.
    pub diagnostics: Diagnostics,
}

/// First difference between a simulated landscape and the expected heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    Length { actual: usize, expected: usize },
    Height { index: usize, actual: i64, expected: i64 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { actual, expected } => {
                write!(f, "length {actual} != expected {expected}")
            }
            Mismatch::Height {
                index,
                actual,
                expected,
            } => write!(f, "height[{index}] = {actual}, expected {expected}"),
        }
    }
}

/// Locate the first index where `actual` and `expected` disagree.
pub fn first_mismatch(actual: &[i64], expected: &[i64]) -> Option<Mismatch> {
    if let Some((index, (&a, &e))) = actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|(_, (a, e))| a != e)
    {
        return Some(Mismatch::Height {
            index,
            actual: a,
            expected: e,
        });
    }
    if actual.len() != expected.len() {
        return Some(Mismatch::Length {
            actual: actual.len(),
            expected: expected.len(),
        });
    }
    None
}

/// A point count and an ordered list of modifications to validate against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geology {
    point_count: usize,
    operations: Vec<Modification>,
    diagnostics: Diagnostics,
}

impl Geology {
    /// Capture a copy of `operations`. A negative `point_count` is
    /// absolute-valued and noted in [`Geology::diagnostics`].
    pub fn new(point_count: i64, operations: &[Modification]) -> Self {
        let mut diagnostics = Diagnostics::new();
        if point_count < 0 {
            diagnostics.record(Diagnostic::NegativePointCount { value: point_count });
        }
        Self {
            point_count: magnitude(point_count),
            operations: operations.to_vec(),
            diagnostics,
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn operations(&self) -> &[Modification] {
        &self.operations
    }

    /// Corrections made while constructing this subject.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// True iff applying `modifications` to `point_count` flat points gives
    /// `expected`.
    ///
    /// The passed arguments are validated, not the stored ones. When
    /// `point_count` disagrees with `expected.len()`, the length of `expected`
    /// wins: a declared count never causes a rejection on its own.
    pub fn is_valid(
        &self,
        point_count: i64,
        modifications: Option<&[Option<Modification>]>,
        expected: Option<&[Option<i64>]>,
    ) -> Result<bool, InvalidArgument> {
        self.validate(point_count, modifications, expected)
            .map(|report| report.valid)
    }

    /// Like [`Geology::is_valid`], returning the simulated landscape and the
    /// corrections applied.
    pub fn validate(
        &self,
        point_count: i64,
        modifications: Option<&[Option<Modification>]>,
        expected: Option<&[Option<i64>]>,
    ) -> Result<ValidationReport, InvalidArgument> {
        let checked = check_input(modifications, expected)?;
        let mut diagnostics = Diagnostics::new();

        let effective_point_count =
            reconcile_point_count(point_count, checked.expected.len(), &mut diagnostics);
        diagnostics.record_negative_coordinates(&checked.steps);
        check_bounds(&checked.steps, effective_point_count)?;

        debug!(
            points = effective_point_count,
            steps = checked.steps.len(),
            "simulating landscape"
        );
        let landscape = simulate(effective_point_count, &checked.steps);
        let valid = landscape == checked.expected;
        debug!(valid, "validation finished");

        Ok(ValidationReport {
            valid,
            effective_point_count,
            landscape,
            diagnostics,
        })
    }

    /// Validate the stored point count and operations against `expected`.
    pub fn matches(&self, expected: &[i64]) -> Result<ValidationReport, InvalidArgument> {
        let modifications: Vec<Option<Modification>> =
            self.operations.iter().copied().map(Some).collect();
        let expected: Vec<Option<i64>> = expected.iter().copied().map(Some).collect();
        let point_count = i64::try_from(self.point_count).unwrap_or(i64::MAX);
        self.validate(point_count, Some(&modifications[..]), Some(&expected[..]))
    }
}

/// The expected heights length is authoritative; the declared count is
/// compared as given, sign included.
fn reconcile_point_count(
    declared: i64,
    expected_len: usize,
    diagnostics: &mut Diagnostics,
) -> usize {
    if declared < 0 {
        diagnostics.record(Diagnostic::NegativePointCount { value: declared });
    }
    if i64::try_from(expected_len).ok() != Some(declared) {
        diagnostics.record(Diagnostic::PointCountReconciled {
            declared,
            effective: expected_len,
        });
    }
    expected_len
}
