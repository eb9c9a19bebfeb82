//! Tracing setup for the externalizer CLI.
//!
//! Transformation warnings reach the subscriber through
//! [`crate::core::warnings::TracingWarnings`], so the filter decides whether
//! users see them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `default_filter` (from `externalizer.toml`)
/// if unset or invalid. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=externalizer=debug externalizer convert suite.yml
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
