//! Warning sink injected into the transformation steps.

/// Receives the user-facing warnings emitted while a suite is rewritten.
///
/// Steps never inspect the outcome of a warning.
pub trait Warnings {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnings;

impl Warnings for TracingWarnings {
    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "externalizer", "{}", message);
    }
}
