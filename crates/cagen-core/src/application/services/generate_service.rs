//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the request against the catalog
//! 2. Render every owned artifact through the template catalog
//! 3. Format each rendered text through the formatter port
//! 4. Create every target directory, then write every file
//!
//! Steps 1-3 are staged in memory before anything touches the filesystem,
//! so a render or format failure leaves the disk untouched and a directory
//! that cannot be created aborts before the first file is written.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, SourceFormatter},
    domain::{
        ArtifactSet, DomainValidator as validator, GenerationRequest, RenderContext,
        RenderedArtifact, TemplateCatalog,
    },
    error::CagenResult,
};

/// Main generation service.
pub struct GenerateService {
    catalog: TemplateCatalog,
    formatter: Box<dyn SourceFormatter>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given catalog and adapters.
    pub fn new(
        catalog: TemplateCatalog,
        formatter: Box<dyn SourceFormatter>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            formatter,
            filesystem,
        }
    }

    /// Render and format every artifact of `request` without writing.
    #[instrument(
        skip_all,
        fields(entity = %request.entity(), output = %request.output_dir().display())
    )]
    pub fn plan(&self, request: &GenerationRequest) -> CagenResult<ArtifactSet> {
        validator::validate_request(request, &self.catalog)?;

        let ctx = RenderContext::from(request);
        let mut set = ArtifactSet::new(request.output_dir());

        for kind in request.artifact_kinds() {
            let path = request.target_path(kind);
            let raw = self.catalog.render(kind, &ctx)?;
            debug!(%kind, path = %path.display(), bytes = raw.len(), "Artifact rendered");

            let formatted = self.formatter.format(&path, &raw)?;
            set.push(RenderedArtifact::new(kind, path, formatted));
        }

        validator::validate_artifact_set(&set)?;
        Ok(set)
    }

    /// Plan, then materialize every artifact on the filesystem.
    ///
    /// Existing files at the target paths are overwritten.
    pub fn generate(&self, request: &GenerationRequest) -> CagenResult<ArtifactSet> {
        let set = self.plan(request)?;
        self.write(&set)?;
        info!(files = set.len(), "Generation completed");
        Ok(set)
    }

    fn write(&self, set: &ArtifactSet) -> CagenResult<()> {
        for dir in set.directories() {
            self.filesystem.create_dir_all(dir)?;
        }

        for artifact in set.artifacts() {
            if self.filesystem.exists(&artifact.path) {
                debug!(path = %artifact.path.display(), "Overwriting existing file");
            }
            self.filesystem.write_file(&artifact.path, &artifact.content)?;
            info!(kind = %artifact.kind, path = %artifact.path.display(), "Wrote artifact");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::Sequence;

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockFilesystem, MockSourceFormatter},
        },
        domain::{
            ApiOptions, ArtifactKind, DbLibrary, DbOptions, DomainError, EntityName,
            Framework,
        },
        error::CagenError,
    };

    fn entity_stub(c: &RenderContext) -> String {
        format!("package entity\ntype {} struct{{}}\n", c.name)
    }

    fn gateway_stub(c: &RenderContext) -> String {
        format!("package gateway\n// {}\n", c.name)
    }

    fn repo_stub(c: &RenderContext) -> String {
        format!("package repo\n// gorm={}\n", c.is_gorm)
    }

    fn usecase_stub(c: &RenderContext) -> String {
        format!("package usecase\n// {}\n", c.name)
    }

    fn controller_stub(c: &RenderContext) -> String {
        format!("package controller\n// echo={}\n", c.is_echo)
    }

    fn full_catalog() -> TemplateCatalog {
        TemplateCatalog::new()
            .with(ArtifactKind::Entity, entity_stub)
            .with(ArtifactKind::Gateway, gateway_stub)
            .with(ArtifactKind::Repository, repo_stub)
            .with(ArtifactKind::Usecase, usecase_stub)
            .with(ArtifactKind::Controller, controller_stub)
    }

    fn passthrough_formatter() -> MockSourceFormatter {
        let mut fmt = MockSourceFormatter::new();
        fmt.expect_format()
            .returning(|_, source| Ok(source.to_string()));
        fmt
    }

    fn api_request() -> GenerationRequest {
        GenerationRequest::api(
            EntityName::new("Order").unwrap(),
            "api",
            ApiOptions {
                framework: Framework::Echo,
            },
        )
    }

    fn db_request(include_gateway: bool) -> GenerationRequest {
        GenerationRequest::db(
            EntityName::new("User").unwrap(),
            "db",
            DbOptions {
                library: DbLibrary::Gorm,
                include_gateway,
                ..DbOptions::default()
            },
        )
    }

    #[test]
    fn plan_renders_owned_artifacts_in_order_without_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service =
            GenerateService::new(full_catalog(), Box::new(passthrough_formatter()), Box::new(fs));
        let set = service.plan(&db_request(true)).unwrap();

        let kinds: Vec<_> = set.artifacts().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Entity,
                ArtifactKind::Gateway,
                ArtifactKind::Repository
            ]
        );
        assert_eq!(
            set.get(ArtifactKind::Repository).unwrap().content,
            "package repo\n// gorm=true\n"
        );
    }

    #[test]
    fn generate_creates_directories_then_writes_files() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("api/usecase"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("api/controller"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("api/usecase/OrderUsecase.go"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("api/controller/OrderController.go")
                    && content.contains("echo=true")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service =
            GenerateService::new(full_catalog(), Box::new(passthrough_formatter()), Box::new(fs));
        let set = service.generate(&api_request()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn format_failure_writes_nothing() {
        let mut fmt = MockSourceFormatter::new();
        fmt.expect_format().returning(|path, _| {
            Err(ApplicationError::FormatFailed {
                path: path.to_path_buf(),
                reason: "3:1: expected '}'".into(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(full_catalog(), Box::new(fmt), Box::new(fs));
        let err = service.generate(&db_request(false)).unwrap_err();
        assert!(matches!(
            err,
            CagenError::Application(ApplicationError::FormatFailed { .. })
        ));
    }

    #[test]
    fn directory_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let service =
            GenerateService::new(full_catalog(), Box::new(passthrough_formatter()), Box::new(fs));
        assert!(service.generate(&db_request(true)).is_err());
    }

    #[test]
    fn write_failure_stops_remaining_artifacts() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service =
            GenerateService::new(full_catalog(), Box::new(passthrough_formatter()), Box::new(fs));
        assert!(service.generate(&db_request(true)).is_err());
    }

    #[test]
    fn missing_template_is_reported_before_formatting() {
        let catalog = TemplateCatalog::new().with(ArtifactKind::Usecase, usecase_stub);
        let mut fmt = MockSourceFormatter::new();
        fmt.expect_format().never();

        let service = GenerateService::new(catalog, Box::new(fmt), Box::new(MockFilesystem::new()));
        assert_eq!(
            service.plan(&api_request()).unwrap_err(),
            CagenError::Domain(DomainError::MissingTemplate {
                kind: ArtifactKind::Controller
            })
        );
    }

    #[test]
    fn existing_files_are_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service =
            GenerateService::new(full_catalog(), Box::new(passthrough_formatter()), Box::new(fs));
        assert!(service.generate(&api_request()).is_ok());
    }
}
