//! Built-in template catalog.
//!
//! The five Go templates ship compiled into the binary; there is no
//! on-disk template discovery. [`catalog`] wires one builder per
//! [`ArtifactKind`].

use cagen_core::domain::{ArtifactKind, TemplateCatalog};
use tracing::debug;

use crate::templates::{controller, entity, gateway, repository, usecase};

/// Catalog holding a builder for every artifact kind.
pub fn catalog() -> TemplateCatalog {
    let catalog = TemplateCatalog::new()
        .with(ArtifactKind::Entity, entity::render)
        .with(ArtifactKind::Gateway, gateway::render)
        .with(ArtifactKind::Repository, repository::render)
        .with(ArtifactKind::Usecase, usecase::render)
        .with(ArtifactKind::Controller, controller::render);
    debug!(templates = catalog.len(), "Built-in catalog ready");
    catalog
}

#[cfg(test)]
mod tests {
    use cagen_core::domain::RenderContext;

    use super::*;

    #[test]
    fn every_kind_is_registered() {
        let catalog = catalog();
        for kind in ArtifactKind::ALL {
            assert!(catalog.contains(kind), "missing {kind}");
        }
    }

    #[test]
    fn every_template_declares_its_package() {
        let catalog = catalog();
        let ctx = RenderContext::new("User");
        for kind in ArtifactKind::ALL {
            let text = catalog.render(kind, &ctx).unwrap();
            assert!(
                text.starts_with(&format!("package {}\n", kind.package())),
                "{kind} rendered:\n{text}"
            );
        }
    }
}
