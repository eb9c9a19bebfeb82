//! Suite YAML load/save helpers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml::Value;

use crate::core::suite::SuiteDocument;

/// Parse a suite document from YAML text. An empty document is an empty suite.
///
/// Merge keys (`<<: *anchor`) are resolved before the schema sees the
/// document, so merged hooks and `archive` entries are rewritten like inline
/// ones.
pub fn parse_suite(contents: &str) -> Result<SuiteDocument> {
    if contents.trim().is_empty() {
        return Ok(SuiteDocument::default());
    }
    let mut value: Value = serde_yaml::from_str(contents).context("parse suite yaml")?;
    value.apply_merge().context("resolve suite yaml merge keys")?;
    serde_yaml::from_value(value).context("deserialize suite")
}

/// Load a suite document from disk.
pub fn load_suite(path: &Path) -> Result<SuiteDocument> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read suite {}", path.display()))?;
    parse_suite(&contents).with_context(|| format!("load suite {}", path.display()))
}

/// Serialize a suite to YAML text.
pub fn render_suite(suite: &SuiteDocument, trailing_newline: bool) -> Result<String> {
    let mut buf = serde_yaml::to_string(suite).context("serialize suite yaml")?;
    let trimmed_len = buf.trim_end_matches('\n').len();
    buf.truncate(trimmed_len);
    if trailing_newline {
        buf.push('\n');
    }
    Ok(buf)
}

/// Atomically write YAML produced by [`render_suite`] (temp file + rename).
pub fn write_rendered(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("yml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp suite {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace suite {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_path;

    #[test]
    fn empty_file_is_empty_suite() {
        assert_eq!(parse_suite("\n").expect("parse"), SuiteDocument::default());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(parse_suite("- a\n- b\n").is_err());
    }

    #[test]
    fn merge_keys_are_resolved() {
        let suite = parse_suite(
            "base: &base\n  hooks: [CleanEveryN, X]\n  archive: true\nexecutor:\n  <<: *base\n  fixture: {}\n",
        )
        .expect("parse");
        let executor = suite.executor.as_ref().expect("executor");
        assert_eq!(executor.archive, Some(Value::Bool(true)));
        assert_eq!(
            suite.hooks(),
            Some(
                &[
                    Value::String("CleanEveryN".to_string()),
                    Value::String("X".to_string())
                ][..]
            )
        );
        assert!(!executor.extra.contains_key("<<"));
        assert!(executor.extra.contains_key("fixture"));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let suite = load_suite(&fixture_path("structured_hooks")).expect("fixture");
        let path = temp.path().join("nested/out.yml");
        let rendered = render_suite(&suite, true).expect("render");
        write_rendered(&path, &rendered).expect("write");
        assert!(!path.with_extension("yml.tmp").exists());
        let loaded = load_suite(&path).expect("load");
        assert_eq!(loaded, suite);
    }

    #[test]
    fn trailing_newline_is_configurable() {
        let suite = parse_suite("test_kind: js_test\n").expect("parse");
        assert_eq!(render_suite(&suite, true).expect("render"), "test_kind: js_test\n");
        assert_eq!(render_suite(&suite, false).expect("render"), "test_kind: js_test");
    }
}
