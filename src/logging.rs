//! Diagnostics for the demo and benchmark binaries.
//!
//! Events go to stderr so stdout carries only the program output.
//! Filtering comes from `RUST_LOG`, defaulting to `warn`.
//!
//! # Example
//! ```bash
//! RUST_LOG=classic_algos=trace cargo run --bin bubble_sort
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init so tests and repeated calls don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
