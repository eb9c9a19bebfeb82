//! Deterministic, pure logic for rewriting suites.
//!
//! Core modules must be free of I/O side effects. Warnings leave through the
//! injected [`warnings::Warnings`] sink so callers decide where they go.

pub mod compat;
pub mod error;
pub mod external;
pub mod hooks;
pub mod suite;
pub mod warnings;
