//! cagen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cagen
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cagen-cli (CLI)              │
//! │        gen_api / gen_db handlers        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerateService                │
//! │   render → format → mkdir → write       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Filesystem, SourceFormatter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        cagen-adapters                   │
//! │ (GoFormatter, LocalFilesystem, catalog) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cagen_core::prelude::*;
//!
//! let request = GenerationRequest::db(
//!     EntityName::new("User")?,
//!     "db",
//!     DbOptions { library: DbLibrary::Gorm, include_gateway: true, ..Default::default() },
//! );
//!
//! let service = GenerateService::new(catalog, formatter, filesystem);
//! service.generate(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, SourceFormatter},
    };
    pub use crate::domain::{
        ApiOptions, ArtifactKind, ArtifactSet, DbLibrary, DbOptions, EntityName, Framework,
        GenerationRequest, IdType, LayerOptions, RenderContext, RenderedArtifact, TemplateCatalog,
    };
    pub use crate::error::{CagenError, CagenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
