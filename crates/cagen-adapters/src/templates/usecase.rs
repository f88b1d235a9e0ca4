use cagen_core::domain::{ArtifactKind, RenderContext};

use crate::renderer::{Field, GoWriter};

/// Usecase skeleton: struct, input/output, gateway port, constructor, Exec.
pub fn render(ctx: &RenderContext) -> String {
    let name = &ctx.name;
    let usecase = format!("{name}Usecase");
    let port = format!("{usecase}GatewayPort");

    let mut w = GoWriter::new(ArtifactKind::Usecase.package());
    w.blank().open("type (");
    w.open(format!("{usecase} struct {{"));
    w.fields(&[Field::new("gateway", &port)]);
    w.close("}");
    w.open(format!("{usecase}Input struct {{")).close("}");
    w.open(format!("{usecase}Output struct {{")).close("}");
    w.open(format!("{port} interface {{")).close("}");
    w.close(")").blank();

    w.open(format!("func New{usecase}(gateway {port}) *{usecase} {{"))
        .open(format!("return &{usecase}{{"))
        .line("gateway: gateway,")
        .close("}")
        .close("}")
        .blank();

    w.open(format!(
        "func (u {usecase}) Exec(ctx context.Context, i *{usecase}Input) (*{usecase}Output, error) {{"
    ))
    .line(format!("return &{usecase}Output{{}}, nil"))
    .close("}");

    w.finish()
}
