//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cleanddd-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CoreResult;

/// Port for line-oriented console interaction.
///
/// Implemented by:
/// - `cleanddd_adapters::console::StdConsole` (production)
/// - `cleanddd_adapters::console::ScriptedConsole` (testing)
pub trait Console: Send + Sync {
    /// Write `text` followed by a newline to standard output.
    fn write_line(&self, text: &str) -> CoreResult<()>;

    /// Show `prompt` without a trailing newline and read one line.
    ///
    /// Returns `Ok(None)` at end-of-input. The line terminator is removed;
    /// other whitespace is left for the caller to handle.
    fn read_line(&self, prompt: &str) -> CoreResult<Option<String>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cleanddd_adapters::filesystem::LocalFilesystem` (production)
/// - `cleanddd_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Write `content` to `path`, creating the file or replacing its contents.
    ///
    /// Parent directories are not created.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;
}

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exited with status zero.
    Success,
    /// Exited non-zero (or was killed) with the given code.
    Failed { code: i32 },
    /// The executable could not be found.
    NotFound,
}

/// Port for running external commands.
///
/// Implemented by:
/// - `cleanddd_adapters::process::SystemCommandRunner` (production)
/// - `cleanddd_adapters::process::RecordingCommandRunner` (testing)
///
/// The child inherits the parent's stdio; only the exit status is
/// inspected.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutcome>;
}
