use crate::domain::{
    entities::{ArtifactSet, GenerationRequest, TemplateCatalog},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Every artifact the request owns must have a registered template.
    pub fn validate_request(
        request: &GenerationRequest,
        catalog: &TemplateCatalog,
    ) -> Result<(), DomainError> {
        match request
            .artifact_kinds()
            .into_iter()
            .find(|kind| !catalog.contains(*kind))
        {
            Some(kind) => Err(DomainError::MissingTemplate { kind }),
            None => Ok(()),
        }
    }

    pub fn validate_artifact_set(set: &ArtifactSet) -> Result<(), DomainError> {
        set.validate()
    }
}
