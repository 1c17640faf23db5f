//! Diagnostic logging setup
//!
//! User-facing output goes through [`crate::report::Reporter`]; this only
//! configures the `tracing` diagnostics emitted by the runner, client and
//! harness.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "AOC_LOG";

/// Install the global subscriber, writing to stderr. Filtering follows
/// `AOC_LOG` (e.g. `AOC_LOG=debug`, `AOC_LOG=aoc_client=debug`), defaulting
/// to warnings only.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}
