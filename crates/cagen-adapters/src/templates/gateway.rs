use cagen_core::domain::{ArtifactKind, RenderContext};

use super::entity::persisted_fields;
use crate::renderer::{Field, GoWriter};

/// Gateway between the entity and its persistence DTO.
///
/// Holds a write port (Create/Delete) and a read-only port (FetchByID) and
/// translates DTOs to entities on the way through.
pub fn render(ctx: &RenderContext) -> String {
    let name = &ctx.name;
    let id = &ctx.id_type;
    let dto = format!("{name}DTO");
    let port = format!("{name}AdapterDriverPort");
    let ro_port = format!("RO{name}AdapterDriverPort");

    let mut w = GoWriter::new(ArtifactKind::Gateway.package());
    w.blank().open("type (");

    w.open(format!("{dto} struct {{"));
    w.fields(&persisted_fields(id, ctx.is_gorm));
    w.close("}");

    w.open(format!("{name}Gateway struct {{"));
    w.fields(&[Field::new("repo", &port), Field::new("roRepo", &ro_port)]);
    w.close("}");

    w.open(format!("{port} interface {{"))
        .line(format!("Delete{name}(ctx context.Context, id {id}) error"))
        .line(format!("Create{name}(ctx context.Context, dto *{dto}) error"))
        .close("}");

    w.open(format!("{ro_port} interface {{"))
        .line(format!(
            "Fetch{name}ByID(ctx context.Context, id {id}) (*{dto}, error)"
        ))
        .close("}");

    w.close(")").blank();

    w.open(format!("func new{dto}(id {id}) *{dto} {{"))
        .open(format!("return &{dto}{{"))
        .line("ID: id,")
        .close("}")
        .close("}")
        .blank();

    w.open(format!(
        "func New{name}Gateway(repo {port}, roRepo {ro_port}) *{name}Gateway {{"
    ))
    .open(format!("return &{name}Gateway{{"))
    .line("repo:   repo,")
    .line("roRepo: roRepo,")
    .close("}")
    .close("}")
    .blank();

    w.open(format!(
        "func (g {name}Gateway) Create{name}(ctx context.Context, e *entity.{name}) error {{"
    ))
    .line(format!("dto := new{dto}(e.ID)"))
    .line(format!("err := g.repo.Create{name}(ctx, dto)"));
    return_on_err(&mut w, "err");
    w.line("e.ID = dto.ID").line("return nil").close("}").blank();

    w.open(format!(
        "func (g {name}Gateway) Delete{name}(ctx context.Context, e *entity.{name}) error {{"
    ))
    .line(format!("err := g.repo.Delete{name}(ctx, e.ID)"));
    return_on_err(&mut w, "err");
    w.line("return nil").close("}").blank();

    w.open(format!(
        "func (g {name}Gateway) ROFetch{name}ByID(ctx context.Context, id {id}) (*entity.{name}, error) {{"
    ))
    .line(format!("dto, err := g.roRepo.Fetch{name}ByID(ctx, id)"));
    return_on_err(&mut w, "nil, err");
    w.line(format!("e := entity.New{name}(dto.ID)"))
        .line("return e, nil")
        .close("}");

    w.finish()
}

fn return_on_err(w: &mut GoWriter, values: &str) {
    w.open("if err != nil {")
        .line(format!("return {values}"))
        .close("}");
}
