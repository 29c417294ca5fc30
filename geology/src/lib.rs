//! Landscape validation: does a sequence of range operations, applied to a
//! flat line of points, produce the heights someone claims it does?
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (normalization, range transforms,
//!   simulation, precondition checks). No I/O.
//! - **[`io`]**: Side-effecting operations (config and case files).
//!
//! [`validate`] holds the validation subject; [`check`] coordinates core logic
//! with I/O to implement CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;

pub use crate::core::preconditions::InvalidArgument;
pub use crate::core::types::{Landscape, Modification, OperationKind};
pub use crate::validate::{Geology, ValidationReport};
