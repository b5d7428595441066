//! Logging infrastructure for the nimrst CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity resolves in
//! this order:
//!
//! 1. `--verbose`: debug level for nimrst crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG` environment variable
//! 4. Default: info level for nimrst crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("nimrst_cli=debug,nimrst_docs=debug")
    } else if quiet {
        EnvFilter::new("nimrst_cli=error,nimrst_docs=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nimrst_cli=info,nimrst_docs=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
