//! I/O helpers for externalizer commands.

pub mod config;
pub mod suite_store;
