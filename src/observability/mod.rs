//! Tracing subscriber setup for the binary.
//!
//! The library only emits events through `tracing` macros. Installing a
//! subscriber is left to the process that embeds it.

use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions to a level for this crate's events.
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over
/// `verbosity` when set. Calling this twice is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("teaeffect={}", verbosity_level(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
