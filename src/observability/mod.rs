//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` (and `log`, bridged by the
//! subscriber). Logs always go to stderr so rendered reports on stdout stay
//! clean.
//!
//! ## Usage
//!
//! ```ignore
//! use grantlift::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
///
/// - 0: warnings and errors only
/// - `-v`: info
/// - `-vv`: debug
/// - `-vvv`: trace
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
