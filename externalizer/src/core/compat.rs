//! External-compatibility checks over an already converted suite.

use serde_yaml::Value;

use crate::core::external::{INCOMPATIBLE_TAG, NOOP_TEST_LOG, USE_ACTION_PERMITTED_FILE};
use crate::core::hooks::{HookRef, LOGGING_HOOK};
use crate::core::suite::SuiteDocument;

/// List every way `suite` falls short of external compatibility:
/// - no `archive` at either level
/// - a non-empty hook list uses one entry style, starts with the logging
///   hook and holds no incompatible hook
/// - `TestData.useActionPermittedFile` is `false`
/// - `shell_options.eval` ends with the `jsTestLog` no-op
/// - the incompatibility tag is excluded
///
/// An empty result means the suite is external compatible.
pub fn external_violations(suite: &SuiteDocument) -> Vec<String> {
    let mut errors = Vec::new();

    if suite.archive.is_some() {
        errors.push("archive must be absent".to_string());
    }
    if suite
        .executor
        .as_ref()
        .is_some_and(|executor| executor.archive.is_some())
    {
        errors.push("executor.archive must be absent".to_string());
    }

    check_hooks(suite.hooks().unwrap_or_default(), &mut errors);

    let permitted_file = suite
        .test_data()
        .and_then(|data| data.get(USE_ACTION_PERMITTED_FILE));
    if permitted_file != Some(&Value::Bool(false)) {
        errors.push(format!(
            "executor.config.shell_options.global_vars.TestData.{USE_ACTION_PERMITTED_FILE} must be false"
        ));
    }

    let eval = suite
        .shell_options()
        .and_then(|options| options.eval.as_deref())
        .unwrap_or_default();
    if !eval.ends_with(NOOP_TEST_LOG) {
        errors.push(format!(
            "executor.config.shell_options.eval must end with '{NOOP_TEST_LOG}'"
        ));
    }

    let excluded = suite
        .exclude_tags()
        .unwrap_or_default()
        .iter()
        .any(|tag| tag == INCOMPATIBLE_TAG);
    if !excluded {
        errors.push(format!(
            "selector.exclude_with_any_tags must contain '{INCOMPATIBLE_TAG}'"
        ));
    }

    errors
}

fn check_hooks(hooks: &[Value], errors: &mut Vec<String>) {
    let mut style = None;
    for (index, value) in hooks.iter().enumerate() {
        let Some(hook) = HookRef::parse(value) else {
            errors.push(format!("executor.hooks[{index}]: unsupported hook structure"));
            continue;
        };
        let expected = *style.get_or_insert(hook.style());
        if hook.style() != expected {
            errors.push(format!(
                "executor.hooks[{index}]: {:?} entry in a list of {:?} hooks",
                hook.style(),
                expected
            ));
        }
        if index == 0 && hook.name() != LOGGING_HOOK {
            errors.push(format!(
                "executor.hooks[0] must be '{LOGGING_HOOK}', found '{}'",
                hook.name()
            ));
        }
        if hook.is_incompatible() {
            errors.push(format!(
                "executor.hooks[{index}]: '{}' is incompatible with external suites",
                hook.name()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::external::{
        make_external, update_exclude_tags, update_shell, update_test_data,
    };
    use crate::test_support::{RecordingWarnings, load_suite_fixture, suite_from_yaml};

    #[test]
    fn converted_suite_has_no_violations() {
        let mut suite = load_suite_fixture("plain_hooks").expect("fixture");
        make_external(&mut suite, &mut RecordingWarnings::default()).expect("convert");
        assert_eq!(external_violations(&suite), Vec::<String>::new());
    }

    #[test]
    fn converted_empty_suite_has_no_violations() {
        let mut suite = SuiteDocument::default();
        make_external(&mut suite, &mut RecordingWarnings::default()).expect("convert");
        assert!(external_violations(&suite).is_empty());
    }

    #[test]
    fn unconverted_suite_reports_each_violation() {
        let suite = suite_from_yaml(
            "archive: true\nexecutor:\n  archive: true\n  hooks: [ValidateCollections, CleanEveryN]\n",
        );
        let errors = external_violations(&suite);
        assert_eq!(errors.len(), 7, "{errors:#?}");
        assert!(errors.iter().any(|err| err == "archive must be absent"));
        assert!(errors.iter().any(|err| err.contains("executor.hooks[0] must be")));
        assert!(errors.iter().any(|err| err.contains("'CleanEveryN' is incompatible")));
        assert!(errors.iter().any(|err| err.contains(USE_ACTION_PERMITTED_FILE)));
        assert!(errors.iter().any(|err| err.contains("eval must end with")));
        assert!(errors.iter().any(|err| err.contains(INCOMPATIBLE_TAG)));
    }

    #[test]
    fn eval_must_end_with_noop() {
        let mut suite = SuiteDocument::default();
        make_external(&mut suite, &mut RecordingWarnings::default()).expect("convert");
        suite.shell_options_mut().eval = Some(format!("{NOOP_TEST_LOG}load('x.js');"));
        let errors = external_violations(&suite);
        assert_eq!(errors.len(), 1, "{errors:#?}");
    }

    #[test]
    fn unknown_hook_shape_is_reported() {
        let suite = suite_from_yaml("executor:\n  hooks: [AntithesisLogging, 5]\n");
        let errors = external_violations(&suite);
        assert!(
            errors
                .iter()
                .any(|err| err == "executor.hooks[1]: unsupported hook structure")
        );
    }

    #[test]
    fn mixed_hook_styles_are_reported() {
        let mut suite =
            suite_from_yaml("executor:\n  hooks: [AntithesisLogging, {class: X}]\n");
        let mut converted = suite.clone();
        let err = make_external(&mut converted, &mut RecordingWarnings::default())
            .expect_err("mixed hooks");
        assert!(err.to_string().contains("index 1"));

        update_test_data(&mut suite, &mut RecordingWarnings::default());
        update_shell(&mut suite, &mut RecordingWarnings::default());
        update_exclude_tags(&mut suite, &mut RecordingWarnings::default());
        assert_eq!(
            external_violations(&suite),
            vec!["executor.hooks[1]: Structured entry in a list of Plain hooks".to_string()]
        );
    }
}
