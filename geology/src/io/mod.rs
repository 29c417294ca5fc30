//! I/O helpers for geology commands.

pub mod case;
pub mod config;
