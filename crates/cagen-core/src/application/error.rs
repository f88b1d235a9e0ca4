//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters the
//! pipeline drives, not in domain rules. Domain errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while rendering, formatting, or writing artifacts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The formatter rejected the generated text.
    #[error("formatting {path} failed: {reason}")]
    FormatFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state poisoned.
    #[error("adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FormatFailed { path, .. } => vec![
                format!("Generated code for {} is not valid Go", path.display()),
                "Check the -id, -lib and -fw values you passed".into(),
                "If you use an external formatter, make sure it is installed".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure no path component of -d is a regular file".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FormatFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
