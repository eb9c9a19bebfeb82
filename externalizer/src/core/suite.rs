//! Typed schema for the parts of a suite document the externalizer rewrites.
//!
//! Every struct keeps the keys it does not name in a flattened `extra`
//! mapping, so loading, rewriting and writing a suite never drops fields.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Suite configuration document (the YAML root mapping).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteDocument {
    /// Top-level archival config. Any shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<Executor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    /// Executor-level archival config. Any shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<Value>,

    /// Hook entries, kept loosely typed until the hook normalizer inspects
    /// them (see [`crate::core::hooks::HookRef`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ExecutorConfig>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_options: Option<ShellOptions>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellOptions {
    /// Shell code evaluated at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_vars: Option<GlobalVars>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalVars {
    #[serde(
        rename = "TestData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub test_data: Option<Mapping>,

    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_with_any_tags: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl SuiteDocument {
    /// `executor.config.shell_options`, creating each missing level.
    pub fn shell_options_mut(&mut self) -> &mut ShellOptions {
        self.executor
            .get_or_insert_with(Executor::default)
            .config
            .get_or_insert_with(ExecutorConfig::default)
            .shell_options
            .get_or_insert_with(ShellOptions::default)
    }

    /// `executor.config.shell_options.global_vars.TestData`, creating each
    /// missing level.
    pub fn test_data_mut(&mut self) -> &mut Mapping {
        self.shell_options_mut()
            .global_vars
            .get_or_insert_with(GlobalVars::default)
            .test_data
            .get_or_insert_with(Mapping::new)
    }

    pub fn hooks(&self) -> Option<&[Value]> {
        self.executor.as_ref()?.hooks.as_deref()
    }

    pub fn shell_options(&self) -> Option<&ShellOptions> {
        self.executor.as_ref()?.config.as_ref()?.shell_options.as_ref()
    }

    pub fn test_data(&self) -> Option<&Mapping> {
        self.shell_options()?.global_vars.as_ref()?.test_data.as_ref()
    }

    pub fn exclude_tags(&self) -> Option<&[String]> {
        self.selector.as_ref()?.exclude_with_any_tags.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = "\
test_kind: js_test
selector:
  roots:
  - jstests/core/**/*.js
  exclude_with_any_tags:
  - assumes_standalone_mongod
executor:
  fixture:
    class: MongoDFixture
  config:
    shell_options:
      global_vars:
        TestData:
          fuzzMongodConfigs: true
";
        let suite: SuiteDocument = serde_yaml::from_str(raw).expect("parse");
        assert_eq!(
            suite.extra.get("test_kind").and_then(Value::as_str),
            Some("js_test")
        );
        let executor = suite.executor.as_ref().expect("executor");
        assert!(executor.extra.contains_key("fixture"));
        let selector = suite.selector.as_ref().expect("selector");
        assert!(selector.extra.contains_key("roots"));
        assert_eq!(
            suite.test_data().and_then(|data| data.get("fuzzMongodConfigs")),
            Some(&Value::Bool(true))
        );

        let written = serde_yaml::to_string(&suite).expect("serialize");
        let reparsed: SuiteDocument = serde_yaml::from_str(&written).expect("reparse");
        assert_eq!(reparsed, suite);
    }

    #[test]
    fn test_data_mut_creates_intermediate_levels() {
        let mut suite = SuiteDocument::default();
        suite
            .test_data_mut()
            .insert(Value::String("key".to_string()), Value::Bool(true));

        let shell_options = suite.shell_options().expect("shell_options");
        assert!(shell_options.eval.is_none());
        assert_eq!(
            suite.test_data().and_then(|data| data.get("key")),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let suite = SuiteDocument::default();
        let written = serde_yaml::to_string(&suite).expect("serialize");
        assert_eq!(written.trim(), "{}");
    }
}
