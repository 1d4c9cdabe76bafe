//! Diagnostic tracing for the fixer.
//!
//! Tracing goes to stderr and never mixes with the fix report, which
//! [`crate::fix`] writes to stdout regardless of the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `--verbose` turns on per-file and per-rule debug events from this crate
/// only; dependencies stay at `warn`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,pagefix=debug" } else { "warn" }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over `--verbose` when both are given.
///
/// # Example
/// ```bash
/// RUST_LOG=pagefix::io=debug pagefix src/app --check
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}
