//! Process adapter using `std::process::Command`.

use std::io;
use std::process::Command;

use cleanddd_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner},
    },
    error::CoreResult,
};
use tracing::{debug, instrument};

/// Production runner: the child inherits stdin, stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip(self, args), fields(argc = args.len()))]
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutcome> {
        let status = match Command::new(program).args(args).status() {
            Ok(status) => status,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Executable not found on PATH");
                return Ok(CommandOutcome::NotFound);
            }
            Err(e) => {
                return Err(ApplicationError::ToolLaunch {
                    program: program.to_owned(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        debug!(status = %status, "Process exited");
        if status.success() {
            Ok(CommandOutcome::Success)
        } else {
            // Killed by a signal: no code, report a generic failure.
            Ok(CommandOutcome::Failed {
                code: status.code().unwrap_or(1),
            })
        }
    }
}
