//! `externalizer convert`: load a suite, make it external, write it out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::compat::external_violations;
use crate::core::external::make_external;
use crate::core::suite::SuiteDocument;
use crate::core::warnings::Warnings;
use crate::io::config::ExternalizerConfig;
use crate::io::suite_store::{load_suite, render_suite, write_rendered};

/// Where the converted suite goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Returned to the caller (the CLI prints it).
    Stdout,
    File(PathBuf),
}

/// Structured conversion outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// Suite converted and delivered.
    Converted {
        /// YAML of the converted suite.
        rendered: String,
        written_to: Option<PathBuf>,
    },
    /// Post-conversion check failed; nothing was written.
    NotExternal(Vec<String>),
}

/// Convert the suite at `suite_path` and deliver it to `target`.
pub fn convert_suite(
    suite_path: &Path,
    target: &OutputTarget,
    config: &ExternalizerConfig,
    warnings: &mut dyn Warnings,
) -> Result<ConvertOutcome> {
    let mut suite = load_suite(suite_path)?;
    debug!(path = %suite_path.display(), "loaded suite");

    make_external(&mut suite, warnings)
        .with_context(|| format!("make {} external", suite_path.display()))?;

    deliver(&suite, target, config)
}

/// Check (if configured), render, and write an already converted suite.
fn deliver(
    suite: &SuiteDocument,
    target: &OutputTarget,
    config: &ExternalizerConfig,
) -> Result<ConvertOutcome> {
    if config.check_after_convert {
        let errors = external_violations(suite);
        if !errors.is_empty() {
            warn!(violations = errors.len(), "converted suite is not external compatible");
            return Ok(ConvertOutcome::NotExternal(errors));
        }
    }

    let rendered = render_suite(suite, config.output.trailing_newline)?;
    let written_to = match target {
        OutputTarget::Stdout => None,
        OutputTarget::File(path) => {
            write_rendered(path, &rendered)?;
            info!(path = %path.display(), "wrote external suite");
            Some(path.clone())
        }
    };
    Ok(ConvertOutcome::Converted {
        rendered,
        written_to,
    })
}
