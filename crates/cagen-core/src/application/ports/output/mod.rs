//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cagen-adapters` crate provides implementations.

use crate::error::CagenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cagen_adapters::filesystem::LocalFilesystem` (production)
/// - `cagen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if present.
    fn create_dir_all(&self, path: &Path) -> CagenResult<()>;

    /// Create or truncate `path` and write `content`.
    fn write_file(&self, path: &Path, content: &str) -> CagenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for source formatting.
///
/// Implemented by:
/// - `cagen_adapters::formatter::GoFormatter` (built-in)
/// - `cagen_adapters::formatter::ExternalFormatter` (goimports / gofmt)
#[cfg_attr(test, mockall::automock)]
pub trait SourceFormatter: Send + Sync {
    /// Format `source` as if it lived at `path`.
    ///
    /// Fails with `ApplicationError::FormatFailed` when the text is not
    /// syntactically valid.
    fn format(&self, path: &Path, source: &str) -> CagenResult<String>;
}
