//! Shared value types for the simulation core.
//!
//! These types are plain data: constructing one never validates anything.
//! Validation happens once, in [`crate::core::preconditions`], before a
//! landscape is simulated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of range operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// +1 over the interval.
    Raise,
    /// -1 over the interval.
    Depress,
    /// Triangular elevation built from shrinking raises.
    Hill,
    /// Triangular depression built from shrinking depressions.
    Valley,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Raise,
        OperationKind::Depress,
        OperationKind::Hill,
        OperationKind::Valley,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Raise => "raise",
            OperationKind::Depress => "depress",
            OperationKind::Hill => "hill",
            OperationKind::Valley => "valley",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown operation '{s}' (expected raise, depress, hill or valley)")
            })
    }
}

/// One interval-bounded operation as supplied by a caller.
///
/// `x1`/`x2` are raw: possibly negative, possibly out of order. An absent
/// `operation` is representable so that it can be rejected with a precise
/// error instead of at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    pub x1: i64,
    pub x2: i64,
    #[serde(default)]
    pub operation: Option<OperationKind>,
}

impl Modification {
    pub fn new(x1: i64, x2: i64, operation: impl Into<Option<OperationKind>>) -> Self {
        Self {
            x1,
            x2,
            operation: operation.into(),
        }
    }

    /// The simulation step for this modification, if its operation is present.
    pub fn step(&self) -> Option<Step> {
        self.operation.map(|operation| Step {
            x1: self.x1,
            x2: self.x2,
            operation,
        })
    }
}

/// Parses `x1:x2:kind`, e.g. `1:7:hill` or `-3:2:raise`.
impl FromStr for Modification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(x1), Some(x2), Some(kind)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected x1:x2:kind, got '{s}'"));
        };
        let x1 = x1
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid x1 '{x1}': {err}"))?;
        let x2 = x2
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid x2 '{x2}': {err}"))?;
        Ok(Modification::new(x1, x2, kind.parse::<OperationKind>()?))
    }
}

/// A modification whose operation is known to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub x1: i64,
    pub x2: i64,
    pub operation: OperationKind,
}

/// Inclusive, normalized index interval. `lo <= hi` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: usize,
    hi: usize,
}

impl Interval {
    /// Builds an interval from two indices in either order.
    pub fn ordered(a: usize, b: usize) -> Self {
        if a > b {
            Self { lo: b, hi: a }
        } else {
            Self { lo: a, hi: b }
        }
    }

    pub fn lo(&self) -> usize {
        self.lo
    }

    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Number of indices covered, endpoints included.
    pub fn width(&self) -> usize {
        self.hi - self.lo + 1
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Heights indexed `0..len`, created flat and mutated by range operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Landscape {
    heights: Vec<i64>,
}

impl Landscape {
    /// A landscape of `len` points, all at height zero.
    pub fn flat(len: usize) -> Self {
        Self {
            heights: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[i64] {
        &self.heights
    }

    pub fn heights_mut(&mut self) -> &mut [i64] {
        &mut self.heights
    }

    pub fn into_heights(self) -> Vec<i64> {
        self.heights
    }
}

impl From<Vec<i64>> for Landscape {
    fn from(heights: Vec<i64>) -> Self {
        Self { heights }
    }
}

impl PartialEq<[i64]> for Landscape {
    fn eq(&self, other: &[i64]) -> bool {
        self.heights.as_slice() == other
    }
}

impl PartialEq<Vec<i64>> for Landscape {
    fn eq(&self, other: &Vec<i64>) -> bool {
        &self.heights == other
    }
}
