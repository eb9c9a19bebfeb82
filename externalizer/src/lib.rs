//! Rewrites test-suite configurations to run against an external system
//! under test.
//!
//! - **[`core`]**: Pure, deterministic logic (suite schema, hook rewrite,
//!   transformation steps, compatibility checks). No I/O.
//! - **[`io`]**: Suite YAML and tool config files.
//!
//! Orchestration modules ([`convert`], [`check`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod check;
pub mod convert;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
