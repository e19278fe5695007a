//! Shared plumbing behind the `hipack-cat`, `hipack-get`, and
//! `hipack-roundtrip` binaries.

pub mod commands;
pub mod error;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the tracing subscriber the same way across all three
/// binaries: `RUST_LOG`-driven if set, `info` otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
