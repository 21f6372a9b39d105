//! Logging infrastructure for the calculator.
//!
//! Log output goes to stderr so it never interleaves with the prompts
//! and results written to stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default level for interactive runs
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber for a `carbon` run
///
/// `default_level` normally comes from `[logging] level` in the config
/// file. RUST_LOG, when set, takes precedence. Rejected energy input,
/// refused logins and closed input are reported at `warn`; computed
/// totals at `debug`.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug events from shell and aggregator tests into the test output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
