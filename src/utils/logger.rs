//! Logging setup
//!
//! Configures the tracing subscriber for the binary. The default filter is
//! derived from the verbose flag; a set `RUST_LOG` wins over both.

use tracing_subscriber::EnvFilter;

/// Initialize tracing output for the run
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "polytest=debug"
    } else {
        "polytest=info"
    }
}
