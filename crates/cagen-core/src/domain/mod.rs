//! Core domain layer for cagen.
//!
//! This module contains pure generation logic with no I/O. Rendering builders,
//! formatting, and filesystem access are reached via ports defined in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem or process calls
//! - **Validated values**: an `EntityName` is a Go identifier by construction
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact_set::{ArtifactSet, RenderedArtifact},
    request::{ApiOptions, DbOptions, GenerationRequest, LayerOptions},
    template::{RenderContext, TemplateCatalog, TemplateFn},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ArtifactKind, DbLibrary, EntityName, Framework, GO_FILE_EXTENSION, GO_KEYWORDS, IdType,
};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use super::*;

    fn name(s: &str) -> EntityName {
        EntityName::new(s).unwrap()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn entity_name_accepts_go_identifiers() {
        for valid in ["User", "OrderItem", "_internal", "audit_log", "V2", "Ünicode"] {
            assert!(EntityName::new(valid).is_ok(), "rejected {valid}");
        }
    }

    #[test]
    fn entity_name_rejects_empty() {
        assert_eq!(EntityName::new(""), Err(DomainError::EmptyEntityName));
    }

    #[test]
    fn entity_name_rejects_non_identifiers() {
        for invalid in ["1User", "my-entity", "Order Item", "a.b", "x/y"] {
            assert!(
                matches!(
                    EntityName::from_str(invalid),
                    Err(DomainError::InvalidEntityName { .. })
                ),
                "accepted {invalid}"
            );
        }
    }

    #[test]
    fn entity_name_rejects_go_keywords() {
        for keyword in GO_KEYWORDS {
            assert_eq!(
                EntityName::new(keyword),
                Err(DomainError::InvalidEntityName {
                    name: keyword.into(),
                    reason: "is a Go keyword".into(),
                }),
                "accepted {keyword}"
            );
        }
        // Case matters: only the lowercase words are reserved.
        assert!(EntityName::new("Type").is_ok());
        assert!(EntityName::new("types").is_ok());
    }

    #[test]
    fn id_type_rejects_keywords() {
        for keyword in ["func", "map", "struct", "chan"] {
            assert!(
                matches!(IdType::new(keyword), Err(DomainError::InvalidIdType { .. })),
                "accepted {keyword}"
            );
        }
        assert_eq!(IdType::new("map[string]int").unwrap().as_str(), "map[string]int");
    }

    #[test]
    fn id_type_trims_and_rejects_blank() {
        assert_eq!(IdType::new(" string ").unwrap().as_str(), "string");
        assert!(IdType::new("   ").is_err());
        assert!(IdType::new("map[string] int").is_err());
        assert_eq!(IdType::default().as_str(), "int64");
    }

    #[test]
    fn framework_parse_keeps_unknown_values() {
        assert_eq!(Framework::from("net/http"), Framework::NetHttp);
        assert_eq!(Framework::from("echo"), Framework::Echo);
        let gin = Framework::from("gin");
        assert_eq!(gin, Framework::Other("gin".into()));
        assert!(!gin.is_known());
        assert_eq!(gin.to_string(), "gin");
    }

    #[test]
    fn library_parse_keeps_unknown_values() {
        assert_eq!(DbLibrary::from("database/sql"), DbLibrary::DatabaseSql);
        assert_eq!(DbLibrary::from("gorm"), DbLibrary::Gorm);
        assert_eq!(DbLibrary::from("sqlx"), DbLibrary::Other("sqlx".into()));
    }

    #[test]
    fn artifact_kind_layout() {
        assert_eq!(ArtifactKind::Repository.directory(), "repo");
        assert_eq!(ArtifactKind::Repository.suffix(), "Repo");
        assert_eq!(ArtifactKind::Entity.suffix(), "");
        assert_eq!(ArtifactKind::from_package("usecase"), Some(ArtifactKind::Usecase));
        assert_eq!(ArtifactKind::from_package("http"), None);
    }

    // ========================================================================
    // Generation Request Tests
    // ========================================================================

    #[test]
    fn api_request_owns_usecase_then_controller() {
        let req = GenerationRequest::api(name("Order"), "api", ApiOptions::default());
        assert_eq!(
            req.artifact_kinds(),
            vec![ArtifactKind::Usecase, ArtifactKind::Controller]
        );
        assert_eq!(
            req.target_path(ArtifactKind::Usecase),
            PathBuf::from("api/usecase/OrderUsecase.go")
        );
        assert_eq!(
            req.target_path(ArtifactKind::Controller),
            PathBuf::from("api/controller/OrderController.go")
        );
    }

    #[test]
    fn db_request_includes_gateway_only_when_asked() {
        let without = GenerationRequest::db(name("User"), "db", DbOptions::default());
        assert_eq!(
            without.artifact_kinds(),
            vec![ArtifactKind::Entity, ArtifactKind::Repository]
        );

        let with = GenerationRequest::db(
            name("User"),
            "db",
            DbOptions {
                include_gateway: true,
                ..DbOptions::default()
            },
        );
        assert_eq!(
            with.artifact_kinds(),
            vec![
                ArtifactKind::Entity,
                ArtifactKind::Gateway,
                ArtifactKind::Repository
            ]
        );
        assert_eq!(
            with.target_path(ArtifactKind::Entity),
            PathBuf::from("db/entity/User.go")
        );
        assert_eq!(
            with.target_path(ArtifactKind::Gateway),
            PathBuf::from("db/gateway/UserGateway.go")
        );
        assert_eq!(
            with.target_path(ArtifactKind::Repository),
            PathBuf::from("db/repo/UserRepo.go")
        );
    }

    #[test]
    fn target_paths_are_deterministic() {
        let a = GenerationRequest::db(name("User"), ".", DbOptions::default());
        let b = GenerationRequest::db(name("User"), ".", DbOptions::default());
        for kind in a.artifact_kinds() {
            assert_eq!(a.target_path(kind), b.target_path(kind));
        }
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_from_api_request() {
        let req = GenerationRequest::api(
            name("Order"),
            ".",
            ApiOptions {
                framework: Framework::Echo,
            },
        );
        let ctx = RenderContext::from(&req);
        assert_eq!(ctx.name, "Order");
        assert!(ctx.is_echo);
        assert!(!ctx.is_net_http);
        assert!(!ctx.is_gorm && !ctx.is_db_sql && !ctx.has_gateway);
    }

    #[test]
    fn render_context_unknown_framework_sets_no_gate() {
        let ctx = RenderContext::new("X").with_framework(&Framework::from("gin"));
        assert!(!ctx.is_echo);
        assert!(!ctx.is_net_http);
    }

    #[test]
    fn render_context_from_db_request() {
        let req = GenerationRequest::db(
            name("User"),
            ".",
            DbOptions {
                id_type: IdType::new("string").unwrap(),
                library: DbLibrary::Gorm,
                include_gateway: true,
            },
        );
        let ctx = RenderContext::from(&req);
        assert_eq!(ctx.id_type, "string");
        assert!(ctx.is_gorm);
        assert!(!ctx.is_db_sql);
        assert!(ctx.has_gateway);
        assert!(!ctx.gorm_on_entity());
    }

    // ========================================================================
    // Template Catalog Tests
    // ========================================================================

    fn fake_entity(ctx: &RenderContext) -> String {
        format!("package entity\n// {}\n", ctx.name)
    }

    #[test]
    fn catalog_renders_registered_kind() {
        let catalog = TemplateCatalog::new().with(ArtifactKind::Entity, fake_entity);
        let out = catalog
            .render(ArtifactKind::Entity, &RenderContext::new("User"))
            .unwrap();
        assert_eq!(out, "package entity\n// User\n");
    }

    #[test]
    fn catalog_missing_kind_is_error() {
        let catalog = TemplateCatalog::new();
        assert_eq!(
            catalog.render(ArtifactKind::Gateway, &RenderContext::new("User")),
            Err(DomainError::MissingTemplate {
                kind: ArtifactKind::Gateway
            })
        );
    }

    #[test]
    fn validator_requires_template_for_every_owned_kind() {
        let catalog = TemplateCatalog::new().with(ArtifactKind::Entity, fake_entity);
        let req = GenerationRequest::db(name("User"), ".", DbOptions::default());
        assert_eq!(
            DomainValidator::validate_request(&req, &catalog),
            Err(DomainError::MissingTemplate {
                kind: ArtifactKind::Repository
            })
        );
    }

    // ========================================================================
    // Artifact Set Tests
    // ========================================================================

    #[test]
    fn artifact_set_rejects_duplicates() {
        let set = ArtifactSet::new("out")
            .with_artifact(RenderedArtifact::new(ArtifactKind::Entity, "out/entity/A.go", ""))
            .with_artifact(RenderedArtifact::new(ArtifactKind::Entity, "out/entity/A.go", ""));
        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn artifact_set_rejects_empty() {
        assert_eq!(
            ArtifactSet::new("out").validate(),
            Err(DomainError::EmptyArtifactSet)
        );
    }

    #[test]
    fn artifact_set_directories_are_unique_and_ordered() {
        let set = ArtifactSet::new("out")
            .with_artifact(RenderedArtifact::new(ArtifactKind::Entity, "out/entity/A.go", ""))
            .with_artifact(RenderedArtifact::new(ArtifactKind::Entity, "out/entity/B.go", ""))
            .with_artifact(RenderedArtifact::new(ArtifactKind::Repository, "out/repo/ARepo.go", ""));
        assert_eq!(
            set.directories(),
            vec![Path::new("out/entity"), Path::new("out/repo")]
        );
    }

    #[test]
    fn artifact_serializes_without_content() {
        let artifact = RenderedArtifact::new(ArtifactKind::Usecase, "u/usecase/XUsecase.go", "body");
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["kind"], "usecase");
        assert!(json.get("content").is_none());
    }
}
