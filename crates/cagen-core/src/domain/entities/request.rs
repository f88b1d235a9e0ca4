use std::path::{Path, PathBuf};

use crate::domain::value_objects::{
    ArtifactKind, DbLibrary, EntityName, Framework, GO_FILE_EXTENSION, IdType,
};

/// Options of the API layer command (`gen_api`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiOptions {
    pub framework: Framework,
}

/// Options of the DB layer command (`gen_db`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DbOptions {
    pub id_type: IdType,
    pub library: DbLibrary,
    pub include_gateway: bool,
}

/// Layer-specific options; also decides which artifacts a request owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerOptions {
    Api(ApiOptions),
    Db(DbOptions),
}

/// One generation run, built once from parsed flags and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    entity: EntityName,
    output_dir: PathBuf,
    layer: LayerOptions,
}

impl GenerationRequest {
    pub fn new(entity: EntityName, output_dir: impl Into<PathBuf>, layer: LayerOptions) -> Self {
        Self {
            entity,
            output_dir: output_dir.into(),
            layer,
        }
    }

    pub fn api(entity: EntityName, output_dir: impl Into<PathBuf>, options: ApiOptions) -> Self {
        Self::new(entity, output_dir, LayerOptions::Api(options))
    }

    pub fn db(entity: EntityName, output_dir: impl Into<PathBuf>, options: DbOptions) -> Self {
        Self::new(entity, output_dir, LayerOptions::Db(options))
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn layer(&self) -> &LayerOptions {
        &self.layer
    }

    /// Artifacts this request owns, in write order.
    pub fn artifact_kinds(&self) -> Vec<ArtifactKind> {
        match &self.layer {
            LayerOptions::Api(_) => vec![ArtifactKind::Usecase, ArtifactKind::Controller],
            LayerOptions::Db(db) => {
                let mut kinds = vec![ArtifactKind::Entity];
                if db.include_gateway {
                    kinds.push(ArtifactKind::Gateway);
                }
                kinds.push(ArtifactKind::Repository);
                kinds
            }
        }
    }

    /// `{output_dir}/{kind dir}/{Name}{Suffix}.go`
    pub fn target_path(&self, kind: ArtifactKind) -> PathBuf {
        self.output_dir.join(kind.directory()).join(format!(
            "{}{}.{}",
            self.entity,
            kind.suffix(),
            GO_FILE_EXTENSION
        ))
    }
}
