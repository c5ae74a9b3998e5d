//! # CleanDDD CLI
//!
//! Interactive CleanDDD coaching and .NET project initialisation.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                              |
//! |------|------------------------------------------------------|
//! |  0   | Success (a declined confirmation included)           |
//! |  1   | Invalid value, missing tool, I/O or internal error   |
//! |  2   | Argument parse error                                 |
//! |  4   | Configuration error                                  |
//! |  N   | Exit code of a failed `dotnet` invocation            |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init. A missing
    // .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Help and version requests come back as "errors" with exit code 0 and
    // print to stdout; real parse failures print to stderr with exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) if tolerates_bad_config(&cli.command) => {
            warn!("Ignoring unusable configuration: {e}");
            AppConfig::default()
        }
        Err(e) => return handle_error(e, verbose, no_color),
    };
    let no_color = no_color || config.output.no_color;

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("cleanddd completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Coach => commands::coach::execute(config),
        Commands::Init(args) => commands::init::execute(args, config),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global.config, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Commands that must keep working when the config file is broken, so the
/// user can locate or reset it.
fn tolerates_bad_config(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Config(ConfigCommands::Path | ConfigCommands::Init { .. })
            | Commands::Completions(_)
    )
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // Written straight to stderr so it shows even when stdout is redirected.
    let msg = if !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
