//! Application layer for cagen.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (`GenerateService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::GenerateService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SourceFormatter};

pub use error::ApplicationError;
