// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ArtifactKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (service results are inspected by tests and the CLI)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("entity name cannot be empty")]
    EmptyEntityName,

    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("invalid id type '{id_type}': {reason}")]
    InvalidIdType { id_type: String, reason: String },

    #[error("duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("artifact set is empty")]
    EmptyArtifactSet,

    // ========================================================================
    // Internal Errors (the shipped catalog is fixed)
    // ========================================================================
    #[error("no template registered for artifact kind '{kind}'")]
    MissingTemplate { kind: ArtifactKind },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyEntityName => vec![
                "Pass the entity name as the last argument".into(),
                "Example: ca_gen gen_db -lib gorm User".into(),
            ],
            Self::InvalidEntityName { name, reason } => vec![
                format!("'{name}' cannot be used as a Go identifier: {reason}"),
                "Start with a letter or underscore".into(),
                "Use only letters, digits, and underscores".into(),
                "Examples: User, OrderItem, audit_log".into(),
            ],
            Self::InvalidIdType { .. } => vec![
                "Pass a Go type for the ID field".into(),
                "Examples: -id int64, -id string, -id uuid.UUID".into(),
            ],
            Self::MissingTemplate { kind } => vec![
                format!("The built-in catalog has no '{kind}' template"),
                "This is a bug, please report it".into(),
            ],
            _ => vec!["See `ca_gen help` for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyEntityName
            | Self::InvalidEntityName { .. }
            | Self::InvalidIdType { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::EmptyArtifactSet | Self::MissingTemplate { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
