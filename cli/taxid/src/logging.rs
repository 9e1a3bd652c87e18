//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Builds the filter, preferring `RUST_LOG` over the configured level.
fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize logging to stderr.
pub fn init(level: &str, json: bool) -> anyhow::Result<()> {
    let layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter(level))
        .with(layer)
        .try_init()?;

    Ok(())
}
