//! `externalizer check`: report external-compatibility violations.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::compat::external_violations;
use crate::io::suite_store::load_suite;

/// Outcome of checking one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    External,
    Violations(Vec<String>),
}

/// Load the suite at `suite_path` and check it without modifying it.
pub fn check_suite(suite_path: &Path) -> Result<CheckOutcome> {
    let suite = load_suite(suite_path)?;
    let errors = external_violations(&suite);
    debug!(path = %suite_path.display(), violations = errors.len(), "checked suite");
    if errors.is_empty() {
        return Ok(CheckOutcome::External);
    }
    Ok(CheckOutcome::Violations(errors))
}
