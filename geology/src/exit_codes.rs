//! Stable exit codes for geology CLI commands.

/// Every checked case produced its expected landscape.
pub const VALID: i32 = 0;
/// Malformed input, unreadable files, invalid config or other errors.
pub const ERROR: i32 = 1;
/// At least one case simulated to a different landscape.
pub const MISMATCH: i32 = 2;
