//! Helpers for `geology check` and `geology simulate`.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::core::diagnostics::Diagnostics;
use crate::core::preconditions::{check_bounds, check_operations};
use crate::core::simulate::simulate;
use crate::core::types::{Landscape, Modification};
use crate::io::case::CaseFile;
use crate::io::config::GeologyConfig;
use crate::validate::{Geology, Mismatch, ValidationReport, first_mismatch};

/// Structured outcome of checking one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The operations produce the expected heights.
    Valid(ValidationReport),
    /// The operations produce a different landscape.
    Mismatch {
        report: ValidationReport,
        first: Mismatch,
    },
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckOutcome::Valid(_))
    }

    pub fn report(&self) -> &ValidationReport {
        match self {
            CheckOutcome::Valid(report) | CheckOutcome::Mismatch { report, .. } => report,
        }
    }
}

/// Check an in-memory case.
pub fn check_case(case: &CaseFile, config: &GeologyConfig) -> Result<CheckOutcome> {
    if let Some(expected) = case.expected_heights()
        && expected.len() > config.max_points
    {
        bail!(
            "expected heights has {} points, above max_points {}",
            expected.len(),
            config.max_points
        );
    }

    let geology = Geology::new(case.point_count, &case.present_modifications());
    let report = geology
        .validate(
            case.point_count,
            case.modifications(),
            case.expected_heights(),
        )
        .context("invalid case")?;

    if report.valid {
        return Ok(CheckOutcome::Valid(report));
    }
    let expected: Vec<i64> = case
        .expected_heights()
        .unwrap_or_default()
        .iter()
        .flatten()
        .copied()
        .collect();
    match first_mismatch(report.landscape.heights(), &expected) {
        Some(first) => Ok(CheckOutcome::Mismatch { report, first }),
        None => bail!("validator reported a mismatch but landscapes are equal"),
    }
}

/// Load a case from disk and check it.
pub fn check_case_file(path: &Path, config: &GeologyConfig) -> Result<CheckOutcome> {
    let case = CaseFile::load(path)?;
    check_case(&case, config).with_context(|| format!("check {}", path.display()))
}

/// Simulate `modifications` over `point_count` points without an expected
/// landscape to compare against.
pub fn simulate_modifications(
    point_count: usize,
    modifications: &[Modification],
    config: &GeologyConfig,
) -> Result<(Landscape, Diagnostics)> {
    if point_count > config.max_points {
        bail!(
            "point count {} is above max_points {}",
            point_count,
            config.max_points
        );
    }
    let steps = check_operations(modifications)?;

    let mut diagnostics = Diagnostics::new();
    diagnostics.record_negative_coordinates(&steps);
    check_bounds(&steps, point_count)?;
    Ok((simulate(point_count, &steps), diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preconditions::InvalidArgument;
    use crate::core::types::OperationKind::{Hill, Raise};
    use crate::test_support::{TestDir, modification};

    #[test]
    fn check_returns_valid_for_matching_case() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write_case("hill.json", 6, &[modification(1, 7, Hill)], &[0, 1, 2, 3, 3, 3, 2, 1])
            .expect("write case");
        let outcome = check_case_file(&path, &GeologyConfig::default()).expect("check");
        assert!(outcome.is_valid());
        assert_eq!(outcome.report().effective_point_count, 8);
    }

    #[test]
    fn check_reports_first_mismatch() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write_case("flat.json", 3, &[modification(0, 1, Raise)], &[1, 1, 1])
            .expect("write case");
        let outcome = check_case_file(&path, &GeologyConfig::default()).expect("check");
        match outcome {
            CheckOutcome::Mismatch { first, .. } => assert_eq!(
                first,
                Mismatch::Height {
                    index: 2,
                    actual: 0,
                    expected: 1
                }
            ),
            CheckOutcome::Valid(_) => panic!("expected mismatch"),
        }
    }

    #[test]
    fn check_surfaces_invalid_argument() {
        let case = CaseFile::parse_str(
            r#"{ "point_count": 6, "modifications": [{ "x1": 1, "x2": 7 }], "expected_heights": [0] }"#,
        )
        .expect("parse");
        let err = check_case(&case, &GeologyConfig::default()).expect_err("no operation");
        assert_eq!(
            err.downcast_ref::<InvalidArgument>(),
            Some(&InvalidArgument::MissingOperation { index: 0 })
        );
    }

    #[test]
    fn check_enforces_max_points() {
        let case = CaseFile {
            point_count: 4,
            modifications: Some(Vec::new()),
            expected_heights: Some(vec![Some(0); 4]),
            ..CaseFile::default()
        };
        let config = GeologyConfig {
            max_points: 3,
            ..GeologyConfig::default()
        };
        let err = check_case(&case, &config).expect_err("too many points");
        assert!(err.to_string().contains("max_points"));
    }

    #[test]
    fn simulate_reports_negative_coordinates() {
        let (landscape, diagnostics) = simulate_modifications(
            4,
            &[modification(-3, 1, Raise)],
            &GeologyConfig::default(),
        )
        .expect("simulate");
        assert_eq!(landscape, vec![0, 1, 1, 1]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn simulate_rejects_out_of_range_interval() {
        let err = simulate_modifications(2, &[modification(0, 2, Raise)], &GeologyConfig::default())
            .expect_err("out of range");
        assert!(err.to_string().contains("landscape has 2 points"));
    }
}
