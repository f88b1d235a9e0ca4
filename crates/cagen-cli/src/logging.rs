//! Tracing subscriber setup for the `ca_gen` binary.
//!
//! The library crates only emit events. Level comes from `RUST_LOG` when it
//! is set, otherwise from the flags: `-q` error, default warn, `-v` info,
//! `-vv` debug, `-vvv` trace.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the flag-derived filter.
const TARGETS: [&str; 3] = ["ca_gen", "cagen_core", "cagen_adapters"];

/// Install the global subscriber. Call once, before the first event.
///
/// Output goes to stderr so generated plans on stdout stay parseable.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(level(args)))?,
    };

    let events = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
