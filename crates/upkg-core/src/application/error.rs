//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A target directory cannot be used: empty path, or a file is
    /// squatting where the directory should be.
    #[error("directory unavailable at '{path}': {reason}")]
    DirectoryUnavailable { path: PathBuf, reason: String },

    /// No editor version could be resolved from the request or the registry.
    #[error("Unity editor version unavailable")]
    EditorVersionUnavailable,

    /// Asset registry operation failed.
    #[error("asset registry error: {reason}")]
    RegistryError { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::DirectoryUnavailable { path, .. } => vec![
                format!("Cannot use '{}' as a directory", path.display()),
                "Remove the file occupying the path, or pick another --assets-dir".into(),
            ],
            Self::EditorVersionUnavailable => vec![
                "No ProjectSettings/ProjectVersion.txt was found".into(),
                "Pass --unity-version explicitly, e.g. --unity-version 2021.3".into(),
            ],
            Self::RegistryError { reason } => vec![
                format!("Asset registry failure: {}", reason),
                "Re-run with -vv for detailed diagnostics".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RegistryError { .. } => ErrorCategory::Internal,
            Self::DirectoryUnavailable { .. } => ErrorCategory::Validation,
            Self::EditorVersionUnavailable => ErrorCategory::Configuration,
        }
    }
}
