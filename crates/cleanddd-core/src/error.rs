//! Unified error handling for CleanDDD Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a coarse category the CLI maps
//! to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for CleanDDD Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Errors from the domain layer (invalid values).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (console, filesystem, processes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Exit code reported by the external tool, when that is what failed.
    pub fn tool_exit_code(&self) -> Option<i32> {
        match self {
            Self::Application(e) => e.tool_exit_code(),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories, following the initializer's error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A supplied value is outside its allowed set.
    Validation,
    /// The environment lacks something the workflow needs (e.g. the tool).
    Environment,
    /// The external tool ran and reported failure.
    ExternalTool,
    /// Console or filesystem I/O failed.
    Io,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
