//! Rewrite a suite so it can run against an external system under test.
//!
//! Each step mutates one subtree of the document and reports what it changes
//! through the injected [`Warnings`] sink. [`make_external`] runs them in a
//! fixed order.

use serde_yaml::Value;

use crate::core::error::{ExternalizeError, render};
use crate::core::hooks::{INCOMPATIBLE_HOOKS, LOGGING_HOOK, normalize_hooks};
use crate::core::suite::SuiteDocument;
use crate::core::warnings::Warnings;

/// `TestData` field forced to `false`.
pub const USE_ACTION_PERMITTED_FILE: &str = "useActionPermittedFile";

/// Appended to `shell_options.eval` to silence `jsTestLog`.
pub const NOOP_TEST_LOG: &str = "jsTestLog = Function.prototype;";

/// Tag of tests that cannot run against an external system.
pub const INCOMPATIBLE_TAG: &str = "antithesis_incompatible";

/// Drop `archive` and `executor.archive`.
pub fn delete_archival(suite: &mut SuiteDocument, warnings: &mut dyn Warnings) {
    warnings.warn(
        "`archive` is not supported for external suites and will be removed if it exists.",
    );
    suite.archive = None;
    if let Some(executor) = suite.executor.as_mut() {
        executor.archive = None;
    }
}

/// Prepend the logging hook and drop incompatible hooks.
///
/// Leaves the hook list untouched when it holds an entry of an unsupported
/// shape.
pub fn make_hooks_compatible(
    suite: &mut SuiteDocument,
    warnings: &mut dyn Warnings,
) -> Result<(), ExternalizeError> {
    warnings.warn(&format!(
        "Some hooks are automatically disabled for external suites: {}",
        render(&INCOMPATIBLE_HOOKS)
    ));
    warnings.warn(&format!(
        "The `{LOGGING_HOOK}` hook is automatically added for external suites."
    ));

    let Some(hooks) = suite
        .executor
        .as_mut()
        .and_then(|executor| executor.hooks.as_mut())
    else {
        return Ok(());
    };
    if hooks.is_empty() {
        return Ok(());
    }
    *hooks = normalize_hooks(hooks)?;
    Ok(())
}

/// Force `TestData.useActionPermittedFile` to `false`.
pub fn update_test_data(suite: &mut SuiteDocument, warnings: &mut dyn Warnings) {
    warnings.warn(&format!(
        "`{USE_ACTION_PERMITTED_FILE}` is incompatible with external suites and will always be set to `False`."
    ));
    suite.test_data_mut().insert(
        Value::String(USE_ACTION_PERMITTED_FILE.to_string()),
        Value::Bool(false),
    );
}

/// Append the `jsTestLog` no-op to `shell_options.eval`.
///
/// Appends again on every call.
pub fn update_shell(suite: &mut SuiteDocument, warnings: &mut dyn Warnings) {
    warnings.warn("`jsTestLog` is a no-op on external suites to reduce logging.");
    suite
        .shell_options_mut()
        .eval
        .get_or_insert_with(String::new)
        .push_str(NOOP_TEST_LOG);
}

/// Add the incompatibility tag to `selector.exclude_with_any_tags`.
pub fn update_exclude_tags(suite: &mut SuiteDocument, warnings: &mut dyn Warnings) {
    warnings.warn(&format!(
        "The `{INCOMPATIBLE_TAG}` tagged tests will be excluded for external suites."
    ));
    suite
        .selector
        .get_or_insert_with(Default::default)
        .exclude_with_any_tags
        .get_or_insert_with(Vec::new)
        .push(INCOMPATIBLE_TAG.to_string());
}

/// Modify `suite` in place to be external compatible.
///
/// On error the steps that already ran are not rolled back.
pub fn make_external<'a>(
    suite: &'a mut SuiteDocument,
    warnings: &mut dyn Warnings,
) -> Result<&'a mut SuiteDocument, ExternalizeError> {
    warnings.warn(&format!(
        "This suite is being converted to an 'External Suite': {}",
        render(&*suite)
    ));
    delete_archival(suite, warnings);
    make_hooks_compatible(suite, warnings)?;
    update_test_data(suite, warnings);
    update_shell(suite, warnings);
    update_exclude_tags(suite, warnings);
    Ok(suite)
}
