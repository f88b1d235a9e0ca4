use std::collections::HashMap;
use std::fmt;

use crate::domain::{
    entities::request::{GenerationRequest, LayerOptions},
    error::DomainError,
    value_objects::{ArtifactKind, DbLibrary, Framework, IdType},
};

/// Template variables bound from a [`GenerationRequest`].
///
/// Every conditional block in the catalog is gated on one of these booleans
/// (or the AND of two). A request for one layer leaves the other layer's
/// gates false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub name: String,
    pub id_type: String,
    pub is_gorm: bool,
    pub is_db_sql: bool,
    pub has_gateway: bool,
    pub is_echo: bool,
    pub is_net_http: bool,
}

impl RenderContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_type: IdType::DEFAULT.to_string(),
            is_gorm: false,
            is_db_sql: false,
            has_gateway: false,
            is_echo: false,
            is_net_http: false,
        }
    }

    pub fn with_framework(mut self, framework: &Framework) -> Self {
        self.is_echo = *framework == Framework::Echo;
        self.is_net_http = *framework == Framework::NetHttp;
        self
    }

    pub fn with_library(mut self, library: &DbLibrary) -> Self {
        self.is_gorm = *library == DbLibrary::Gorm;
        self.is_db_sql = *library == DbLibrary::DatabaseSql;
        self
    }

    pub fn with_id_type(mut self, id_type: &IdType) -> Self {
        self.id_type = id_type.to_string();
        self
    }

    pub fn with_gateway(mut self, has_gateway: bool) -> Self {
        self.has_gateway = has_gateway;
        self
    }

    /// ORM annotations belong on the entity only when no gateway DTO exists.
    pub fn gorm_on_entity(&self) -> bool {
        self.is_gorm && !self.has_gateway
    }
}

impl From<&GenerationRequest> for RenderContext {
    fn from(request: &GenerationRequest) -> Self {
        let ctx = Self::new(request.entity().as_str());
        match request.layer() {
            LayerOptions::Api(api) => ctx.with_framework(&api.framework),
            LayerOptions::Db(db) => ctx
                .with_id_type(&db.id_type)
                .with_library(&db.library)
                .with_gateway(db.include_gateway),
        }
    }
}

/// Builder function producing the unformatted text of one artifact.
pub type TemplateFn = fn(&RenderContext) -> String;

/// Mapping from artifact kind to its builder, constructed once at startup.
#[derive(Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<ArtifactKind, TemplateFn>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ArtifactKind, template: TemplateFn) {
        self.templates.insert(kind, template);
    }

    pub fn with(mut self, kind: ArtifactKind, template: TemplateFn) -> Self {
        self.register(kind, template);
        self
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.templates.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn render(&self, kind: ArtifactKind, ctx: &RenderContext) -> Result<String, DomainError> {
        let template = self
            .templates
            .get(&kind)
            .ok_or(DomainError::MissingTemplate { kind })?;
        Ok(template(ctx))
    }
}

impl fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.templates.keys().map(ArtifactKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("TemplateCatalog").field("kinds", &kinds).finish()
    }
}
