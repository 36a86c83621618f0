//! Observability for flightdb
//!
//! - Typed lifecycle events with stable names
//! - `tracing` for emission, one subscriber installed by the binary
//!
//! Stdout is reserved for the run summary; logs go to stderr.

mod events;

pub use events::Event;

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more
/// than once is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("flightdb=debug")
        } else {
            EnvFilter::new("flightdb=warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
