//! Stable exit codes for externalizer CLI commands.

/// Command succeeded, or `check` found no violations.
pub const OK: i32 = 0;
/// Command failed due to unreadable/invalid input, config, or hook structure.
pub const INVALID: i32 = 1;
/// `externalizer check`, or `convert` with `check_after_convert`, found violations.
pub const NOT_EXTERNAL: i32 = 2;
