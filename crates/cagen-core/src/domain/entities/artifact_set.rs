use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ArtifactKind};

/// Rendered and formatted artifacts of one request, ready for materialization.
///
/// This is the output of the planning phase. It contains no business logic,
/// only data.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSet {
    pub(crate) root: PathBuf,
    pub(crate) artifacts: Vec<RenderedArtifact>,
}

impl ArtifactSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, artifact: RenderedArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn with_artifact(mut self, artifact: RenderedArtifact) -> Self {
        self.push(artifact);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::EmptyArtifactSet);
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            if !seen.insert(artifact.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: artifact.path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &RenderedArtifact> {
        self.artifacts.iter()
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&RenderedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Parent directories of every artifact, deduplicated, in first-seen order.
    pub fn directories(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        self.artifacts
            .iter()
            .filter_map(|a| a.path.parent())
            .filter(|dir| seen.insert(*dir))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
}

impl RenderedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
