pub mod artifact_set;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact_set::{ArtifactSet, RenderedArtifact};
pub use request::GenerationRequest;
pub use template::{RenderContext, TemplateCatalog};
