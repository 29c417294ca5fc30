//! Deterministic, pure logic for landscape simulation.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod diagnostics;
pub mod normalize;
pub mod preconditions;
pub mod simulate;
pub mod transform;
pub mod types;
