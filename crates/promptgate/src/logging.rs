//! Log output setup

use tracing_subscriber::EnvFilter;

/// Send log events to stderr: warnings by default, debug with `--verbose`.
///
/// `RUST_LOG` takes precedence when set.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
