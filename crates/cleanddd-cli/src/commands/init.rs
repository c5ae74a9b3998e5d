//! Implementation of the `cleanddd init` command.
//!
//! Responsibility: turn the flags into an `InitRequest`, inject the terminal
//! and process adapters, and report how the run ended. Validation, prompting
//! and the template engine calls all happen in `InitService`.

use tracing::{debug, info, instrument};

use cleanddd_adapters::{StdConsole, SystemCommandRunner};
use cleanddd_core::application::{InitOutcome, InitRequest, InitService};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

/// Execute the `cleanddd init` command.
///
/// A declined confirmation is a successful run: nothing was scaffolded and
/// the command preview has already been printed.
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "failed to determine the current directory")?;

    let request = InitRequest::from(args);
    debug!(?request, "Init request");

    let service = InitService::new(
        Box::new(StdConsole::new()),
        Box::new(SystemCommandRunner::new()),
    )
    .with_toolchain(config.toolchain)
    .with_defaults(config.init.prompt_defaults());

    match service.run(&request, &cwd)? {
        InitOutcome::Created(project) => {
            info!(project = %project, output = %project.output_dir().display(), "Project initialised");
        }
        InitOutcome::Declined { preview, .. } => {
            info!(%preview, "Initialisation declined");
        }
    }

    Ok(())
}
