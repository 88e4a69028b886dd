//! Developer diagnostics on stderr, separate from the operation log

use tracing_subscriber::EnvFilter;

/// Variable holding the tracing filter (e.g. `BIOCTL_TRACE=debug`)
pub const TRACE_FILTER_VAR: &str = "BIOCTL_TRACE";

/// Install the stderr subscriber. Quiet (`warn`) unless the filter variable says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(TRACE_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
