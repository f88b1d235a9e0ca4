//! Infrastructure adapters for cagen.
//!
//! This crate implements the ports defined in `cagen-core::application::ports`.
//! It contains the Go templates and all external dependencies and I/O
//! operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod formatter;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::{ExternalFormatter, ExternalTool, GoFormatter};
