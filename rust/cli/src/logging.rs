//! Diagnostic logging for the `texasduel` binary.
//!
//! Engine events go to stderr so they never interleave with the game
//! transcript on stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}
