//! Typed errors raised by the suite transformation.

use std::fmt::Debug;

use serde::Serialize;
use thiserror::Error;

/// Fatal transformation errors surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalizeError {
    /// A hook entry is neither of the list's detected style nor a plain name
    /// or `{class: ...}` mapping at all.
    #[error(
        "Unknown structure in hook at index {index}. Please reach out in #server-testing: {entry}"
    )]
    UnsupportedHookShape { index: usize, entry: String },
}

/// Compact one-line rendering for log and error messages.
///
/// Falls back to `Debug` when the value has no JSON form (e.g. non-string
/// mapping keys).
pub(crate) fn render<T: Serialize + Debug + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
