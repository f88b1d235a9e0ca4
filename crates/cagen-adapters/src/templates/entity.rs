use cagen_core::domain::{ArtifactKind, RenderContext};

use crate::renderer::{Field, GoWriter};

pub(crate) const PRIMARY_KEY_TAG: &str = r#"gorm:"primaryKey""#;

/// Domain entity with an `ID` field typed by the id type.
///
/// ORM tag and timestamps land here only for gorm without a gateway; with a
/// gateway they move to the DTO.
pub fn render(ctx: &RenderContext) -> String {
    let name = &ctx.name;
    let id = &ctx.id_type;

    let mut w = GoWriter::new(ArtifactKind::Entity.package());
    w.blank().open("type (").open(format!("{name} struct {{"));
    w.fields(&persisted_fields(id, ctx.gorm_on_entity()));
    w.close("}").close(")").blank();

    w.open(format!("func New{name}(id {id}) *{name} {{"))
        .open(format!("return &{name}{{"))
        .line("ID: id,")
        .close("}")
        .close("}");

    w.finish()
}

/// Fields shared by the entity and the gateway DTO.
pub(crate) fn persisted_fields(id_type: &str, gorm: bool) -> Vec<Field> {
    if gorm {
        vec![
            Field::new("ID", id_type).tagged(PRIMARY_KEY_TAG),
            Field::new("CreatedAt", "time.Time"),
            Field::new("UpdatedAt", "time.Time"),
        ]
    } else {
        vec![Field::new("ID", id_type)]
    }
}
