//! Tracing setup for hosts that have no subscriber of their own

use tracing_subscriber::EnvFilter;

/// Install a compact stdout subscriber.
///
/// `verbose` mirrors the suite-level flag: it raises this crate's
/// default filter to `debug`. An explicit `RUST_LOG` wins over both.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let base = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("appium_lifecycle={base}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
