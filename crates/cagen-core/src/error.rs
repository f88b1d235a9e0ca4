//! Error type returned across the core's public API.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

/// A domain rule or a pipeline step failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CagenError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CagenError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Validation failures are the caller's to fix; everything else is not.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) if e.category() == domain::ErrorCategory::Validation => {
                ErrorCategory::Validation
            }
            Self::Domain(_) => ErrorCategory::Internal,
            Self::Application(e) => e.category(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

pub type CagenResult<T> = Result<T, CagenError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn invalid_name_is_a_validation_error() {
        let err = CagenError::from(DomainError::EmptyEntityName);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "entity name cannot be empty");
    }

    #[test]
    fn pipeline_failures_are_internal() {
        let err = CagenError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("db/repo"),
            reason: "Not a directory".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("db/repo")));
    }
}
