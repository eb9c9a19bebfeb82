//! Test-only helpers: a recording warning sink and suite fixtures.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::suite::SuiteDocument;
use crate::core::warnings::Warnings;
use crate::io::suite_store::{load_suite, parse_suite};

/// Collects warnings instead of logging them.
#[derive(Debug, Default)]
pub struct RecordingWarnings {
    pub messages: Vec<String>,
}

impl RecordingWarnings {
    /// True if any recorded warning contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }
}

impl Warnings for RecordingWarnings {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Parse an inline YAML suite, panicking on malformed test input.
pub fn suite_from_yaml(raw: &str) -> SuiteDocument {
    parse_suite(raw).expect("suite yaml")
}

/// Path of `tests/fixtures/<name>.yml`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.yml"))
}

/// Load `tests/fixtures/<name>.yml`.
pub fn load_suite_fixture(name: &str) -> Result<SuiteDocument> {
    load_suite(&fixture_path(name))
}
