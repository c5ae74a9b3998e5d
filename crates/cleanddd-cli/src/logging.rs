//! Diagnostics for `cleanddd` runs.
//!
//! Everything logged lands on stderr, leaving stdout to the quiz and init
//! transcripts. The core and adapter crates emit events; only `main`
//! installs a subscriber.
//!
//! `-q` keeps only ERROR, no flag shows WARN, and each `-v` lowers the bar
//! one step down to TRACE. A set `RUST_LOG` replaces that choice entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets the flag-derived filter applies to; other crates stay silent.
const LOG_TARGETS: [&str; 3] = ["cleanddd", "cleanddd_core", "cleanddd_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directives(level_for(args))),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install the log subscriber: {e}"))
}

/// `-q` wins over any number of `-v`.
fn level_for(args: &GlobalArgs) -> &'static str {
    const BY_VERBOSITY: [&str; 4] = ["warn", "info", "debug", "trace"];

    if args.quiet {
        "error"
    } else {
        BY_VERBOSITY[usize::from(args.verbose).min(BY_VERBOSITY.len() - 1)]
    }
}

/// One `target=level` directive per crate of this workspace.
fn filter_directives(level: &str) -> String {
    LOG_TARGETS.map(|target| format!("{target}={level}")).join(",")
}
