//! Diagnostic tracing for the updater.
//!
//! Output goes to stderr and is controlled by `RUST_LOG`. The one-line
//! result that `daily-canvas update` prints on stdout is not logging and is
//! always emitted.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=daily_canvas=debug daily-canvas update --vault ~/Notes
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
