//! Tracing setup for the `gpumon` binary.
//!
//! The library only emits events. The binary writes them to stderr, keeping
//! stdout for samples, and shows warnings and above unless `RUST_LOG` says
//! otherwise.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry;

/// Install the global subscriber.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let fmt_layer = layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    registry().with(fmt_layer).init();
}
