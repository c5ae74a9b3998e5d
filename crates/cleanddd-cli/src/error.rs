//! Error handling for the CleanDDD CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping (including the template engine's own exit code)

use std::path::PathBuf;
use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use cleanddd_core::error::CoreError;

// Re-export so callers only need `use crate::error::*`.
pub use cleanddd_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `config init` would overwrite an existing file.
    #[error("Configuration file already exists at {path}")]
    ConfigExists { path: PathBuf },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `cleanddd-core`; its message is shown as is.
    #[error(transparent)]
    Core(#[from] CoreError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file (see 'cleanddd config path')".into(),
                "Use 'cleanddd config init --force' to restore the defaults".into(),
            ],

            Self::ConfigExists { path } => vec![
                format!("'{}' is already there", path.display()),
                "Use --force to overwrite it".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Environment => ErrorCategory::NotFound,
                CoreCategory::ExternalTool => ErrorCategory::ExternalTool,
                CoreCategory::Io => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code                         |
    /// |---------------|------------------------------|
    /// | User error    |  1                           |
    /// | Not found     |  1                           |
    /// | External tool |  the tool's own code         |
    /// | Configuration |  4                           |
    /// | Internal      |  1                           |
    ///
    /// Code 2 is left to clap for argument errors.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            ErrorCategory::ExternalTool => self.mirrored_exit_code().unwrap_or(1),
            ErrorCategory::UserError | ErrorCategory::NotFound | ErrorCategory::Internal => 1,
        }
    }

    /// The template engine's exit code when it fits a process exit status.
    fn mirrored_exit_code(&self) -> Option<u8> {
        match self {
            Self::Core(core) => core
                .tool_exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0),
            _ => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(output, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        let _ = writeln!(output, "  {}", self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(output, "\n  {} {}", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(output, "\n{}", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {}", suggestion);
            }
        }

        if !verbose {
            let _ = write!(
                output,
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {}", self);

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Failures the user can act on are already rendered on stderr, so they
    /// only reach the log at DEBUG.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::NotFound => tracing::debug!("Not found: {}", self),
            ErrorCategory::ExternalTool => tracing::debug!("External tool failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// A required program or resource is missing.
    NotFound,
    /// The external template engine reported failure.
    ExternalTool,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `std::io::Error` results into [`CliError`]
/// at call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use cleanddd_core::{application::ApplicationError, domain::DomainError};

    fn tool_failed(code: i32) -> CliError {
        CliError::Core(
            ApplicationError::ToolFailed {
                action: "dotnet new".into(),
                command: "dotnet new netcorepal-web".into(),
                code,
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_choice_exits_one_and_lists_allowed() {
        let err = CliError::Core(
            DomainError::InvalidChoice {
                setting: "Database",
                value: "Oracle".into(),
                allowed: vec!["MySql", "SqlServer"],
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Invalid Database: Oracle. Allowed: MySql, SqlServer"
        );
    }

    #[test]
    fn missing_tool_exits_one() {
        let err = CliError::Core(
            ApplicationError::ToolNotFound {
                program: "dotnet".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn tool_failure_mirrors_exit_code() {
        assert_eq!(tool_failed(3).exit_code(), 3);
        assert_eq!(tool_failed(255).exit_code(), 255);
    }

    #[test]
    fn unrepresentable_tool_code_falls_back_to_one() {
        assert_eq!(tool_failed(-1).exit_code(), 1);
        assert_eq!(tool_failed(1000).exit_code(), 1);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("/tmp/x.toml"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Configuration file already exists at /tmp/x.toml"));
        assert!(s.contains("Use --force"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "reading config".into(),
            source: io::Error::other("disk on fire"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk on fire"));
        assert!(!s.contains("Use -v"));
    }

    #[test]
    fn verbose_core_error_is_not_repeated_as_cause() {
        let err = CliError::Core(
            ApplicationError::ToolNotFound {
                program: "nope".into(),
            }
            .into(),
        );
        assert!(err.source().is_none());

        let s = err.format_plain(true);
        assert_eq!(s.matches("nope CLI not found").count(), 1);
        assert!(!s.contains("Caused by"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
