//! Application layer errors.
//!
//! These errors represent failures at the boundary (console, filesystem,
//! external processes), not rule violations. Rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The external tool's executable could not be found.
    #[error("{program} CLI not found. Please install .NET SDK.")]
    ToolNotFound { program: String },

    /// The external tool ran and exited non-zero.
    #[error("{action} failed with exit code {code}")]
    ToolFailed {
        action: String,
        command: String,
        code: i32,
    },

    /// The external tool could not be started for another reason.
    #[error("Failed to launch {program}: {reason}")]
    ToolLaunch { program: String, reason: String },

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {reason}")]
    Console { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolNotFound { program } => vec![
                format!("'{program}' must be installed and on your PATH"),
                "Download the .NET SDK from https://dotnet.microsoft.com/download".into(),
                "Or pass --skip-template-install if the template is already installed".into(),
            ],
            Self::ToolFailed { command, .. } => vec![
                format!("Command: {command}"),
                "Check the tool output above for details".into(),
            ],
            Self::ToolLaunch { program, .. } => vec![
                format!("Check that '{program}' is executable"),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Console { .. } => vec!["Check that the terminal is still attached".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolNotFound { .. } => ErrorCategory::Environment,
            Self::ToolFailed { .. } => ErrorCategory::ExternalTool,
            Self::ToolLaunch { .. } => ErrorCategory::Environment,
            Self::Console { .. } | Self::FilesystemError { .. } => ErrorCategory::Io,
        }
    }

    /// Exit code of the external tool, if this error carries one.
    pub fn tool_exit_code(&self) -> Option<i32> {
        match self {
            Self::ToolFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
