//! Diagnostic logging for the library and the `portgrid` binary.
//!
//! Events are emitted with `tracing` and formatted to stderr, leaving stdout
//! to the grid and JSON output. `PORTGRID_LOG` takes an `EnvFilter`
//! directive and wins over the verbosity passed by the caller.

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PORTGRID_LOG";

/// Map a `-v` count to the default level: warn, info, debug, then trace.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error when `PORTGRID_LOG` holds an invalid directive or a
/// global subscriber has already been installed.
pub fn initialize(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env()
        .map_err(|err| anyhow!("invalid {LOG_ENV} directive: {err}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
