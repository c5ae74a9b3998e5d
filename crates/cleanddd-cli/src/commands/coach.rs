//! Implementation of the `cleanddd coach` command.

use tracing::{info, instrument};

use cleanddd_adapters::{LocalFilesystem, StdConsole};
use cleanddd_core::application::CoachService;

use crate::{config::AppConfig, error::CliResult};

/// Run one interactive coaching session on the terminal.
#[instrument(skip_all)]
pub fn execute(config: AppConfig) -> CliResult<()> {
    let service = CoachService::new(
        Box::new(StdConsole::new()),
        Box::new(LocalFilesystem::new()),
        dirs::home_dir(),
    )
    .with_default_notes_path(config.coach.notes_path);

    let written = service.run()?;
    info!(path = %written.display(), "Coaching session finished");
    Ok(())
}
