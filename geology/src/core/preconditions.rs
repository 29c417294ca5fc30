//! Precondition checks run before any landscape is simulated.
//!
//! All checks are always on, in every build profile. The first failing check
//! aborts validation; no partial result is produced.

use thiserror::Error;

use crate::core::normalize::normalize;
use crate::core::types::{Modification, Step};

/// Malformed validation input. Every variant is an invalid-argument failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("modifications list is missing")]
    MissingModifications,

    #[error("expected heights list is missing")]
    MissingExpectedHeights,

    #[error("modifications[{index}] is null")]
    NullModification { index: usize },

    #[error("expected_heights[{index}] is null")]
    NullHeight { index: usize },

    #[error("modifications[{index}] has no operation")]
    MissingOperation { index: usize },

    #[error("modifications[{index}] reaches index {hi} but the landscape has {len} points")]
    OutOfBounds { index: usize, hi: usize, len: usize },
}

/// Input that passed the null checks, ready for reconciliation and simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedInput {
    pub steps: Vec<Step>,
    pub expected: Vec<i64>,
}

/// Reject missing lists, null elements and absent operations, in that order.
pub fn check_input(
    modifications: Option<&[Option<Modification>]>,
    expected: Option<&[Option<i64>]>,
) -> Result<CheckedInput, InvalidArgument> {
    let modifications = modifications.ok_or(InvalidArgument::MissingModifications)?;
    let expected = expected.ok_or(InvalidArgument::MissingExpectedHeights)?;

    let present = modifications
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(InvalidArgument::NullModification { index }))
        .collect::<Result<Vec<Modification>, _>>()?;

    let expected = expected
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(InvalidArgument::NullHeight { index }))
        .collect::<Result<Vec<i64>, _>>()?;

    let steps = check_operations(&present)?;

    Ok(CheckedInput { steps, expected })
}

/// Reject any modification whose operation is absent.
pub fn check_operations(modifications: &[Modification]) -> Result<Vec<Step>, InvalidArgument> {
    modifications
        .iter()
        .enumerate()
        .map(|(index, modification)| {
            modification
                .step()
                .ok_or(InvalidArgument::MissingOperation { index })
        })
        .collect()
}

/// Reject any step whose normalized interval reaches past `len`.
pub fn check_bounds(steps: &[Step], len: usize) -> Result<(), InvalidArgument> {
    for (index, step) in steps.iter().enumerate() {
        let hi = normalize(step.x1, step.x2).hi();
        if hi >= len {
            return Err(InvalidArgument::OutOfBounds { index, hi, len });
        }
    }
    Ok(())
}
