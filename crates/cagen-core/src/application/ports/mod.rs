//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cagen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `SourceFormatter`: formatting and import resolution of generated code
//!
//! - **Driving (Input) Ports**: the CLI command handlers calling `GenerateService`

pub mod output;

pub use output::{Filesystem, SourceFormatter};

#[cfg(test)]
pub use output::{MockFilesystem, MockSourceFormatter};
