// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through the CLI)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// An enumerated setting received a value outside its allowed list.
    #[error("Invalid {setting}: {value}. Allowed: {}", .allowed.join(", "))]
    InvalidChoice {
        setting: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A boolean flag received a token that is neither truthy nor falsy.
    #[error("Expected boolean value (true/false), got '{value}'")]
    InvalidBoolean { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidChoice {
                setting, allowed, ..
            } => {
                let mut suggestions = vec![format!("Allowed values for {setting}:")];
                for value in allowed {
                    suggestions.push(format!("  • {value}"));
                }
                suggestions.push(format!(
                    "Or omit --{setting} to pick from a menu interactively"
                ));
                suggestions
            }
            Self::InvalidBoolean { .. } => vec![
                "Use one of: true, false, yes, no, 1, 0".into(),
                "Matching is case-insensitive".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoice { .. } | Self::InvalidBoolean { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
