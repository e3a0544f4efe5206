//! Logging setup for the `dexlab` binary.
//!
//! Diagnostics go to stderr through `tracing`; the analysis report itself is
//! printed to stdout.

use std::io;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Initializes the global subscriber.
///
/// `RUST_LOG` takes precedence over the level chosen by the flags.
pub(crate) fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(verbose, quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so only
    // the flag mapping is tested here.
    #[test]
    fn test_verbosity_levels() {
        let cases = [
            ((true, 0), LevelFilter::ERROR),
            ((true, 3), LevelFilter::ERROR),
            ((false, 0), LevelFilter::WARN),
            ((false, 1), LevelFilter::INFO),
            ((false, 2), LevelFilter::DEBUG),
            ((false, 3), LevelFilter::TRACE),
            ((false, 10), LevelFilter::TRACE),
        ];
        for ((quiet, verbose), expected) in cases {
            assert_eq!(
                level_filter(verbose, quiet),
                expected,
                "quiet={quiet}, verbose={verbose}"
            );
        }
    }
}
