// Logging setup for hosts embedding the reporter

use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-filter default
///
/// RUST_LOG overrides the chosen filter. Safe to call more than once; later
/// calls are no-ops.
pub fn init(verbose: bool) {
    let filter = if verbose {
        "runreport=debug,warn"
    } else {
        "runreport=warn,error"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init();
}
