// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("company name must not be empty")]
    EmptyCompanyName,

    #[error("no '<major>.<minor>' version found in '{raw}'")]
    UnparsableEditorVersion { raw: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{}' is not a valid package project name", name),
                "Names must begin with an uppercase letter and contain only alphanumeric characters".into(),
                "Examples: Widgets, CoreTools, Foo2Bar".into(),
            ],
            Self::EmptyCompanyName => vec![
                "Set a company name with --company or in the config file".into(),
                "Run 'upkg config path' to find the config file".into(),
            ],
            Self::UnparsableEditorVersion { raw } => vec![
                format!("Could not find a major.minor version in '{}'", raw),
                "Pass --unity-version explicitly, e.g. --unity-version 2021.3".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::EmptyCompanyName
            | Self::UnparsableEditorVersion { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
