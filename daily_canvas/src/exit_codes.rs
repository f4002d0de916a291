//! Stable exit codes for `daily-canvas` commands.

/// Command succeeded, including runs that skipped (no canvas, no group).
pub const OK: i32 = 0;
/// Command failed: invalid config, unreadable vault, write failure, or a
/// malformed canvas under strict parsing.
pub const INVALID: i32 = 1;
