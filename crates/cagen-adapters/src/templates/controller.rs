use cagen_core::domain::{ArtifactKind, RenderContext};

use crate::renderer::{Field, GoWriter};

/// Controller holding a usecase pointer, with one handler per enabled
/// framework gate. The gates are independent; both may be set.
pub fn render(ctx: &RenderContext) -> String {
    let name = &ctx.name;
    let controller = format!("{name}Controller");
    let usecase = format!("usecase.{name}Usecase");

    let mut w = GoWriter::new(ArtifactKind::Controller.package());
    w.blank().open("type (");
    w.open(format!("{controller} struct {{"));
    w.fields(&[Field::new("usecase", format!("*{usecase}"))]);
    w.close("}");
    w.close(")").blank();

    w.open(format!(
        "func New{controller}(usecase *{usecase}) *{controller} {{"
    ))
    .open(format!("return &{controller}{{"))
    .line("usecase: usecase,")
    .close("}")
    .close("}");

    if ctx.is_net_http {
        w.blank()
            .open(format!(
                "func (u {controller}) ServeHTTP(w http.ResponseWriter, r *http.Request) {{"
            ))
            .line("ctx := r.Context()")
            .line(format!("var input {usecase}Input"))
            .line("output, err := u.usecase.Exec(ctx, &input)")
            .open("if err != nil {")
            .line("// TODO: handle err")
            .close("}")
            .line("_ = output")
            .close("}");
    }

    if ctx.is_echo {
        w.blank()
            .open(format!(
                "func (u {controller}) EchoHandler(c echo.Context) error {{"
            ))
            .line("ctx := c.Request().Context()")
            .line(format!("var input {usecase}Input"))
            .line("output, err := u.usecase.Exec(ctx, &input)")
            .open("if err != nil {")
            .line("return err")
            .close("}")
            .line("_ = output")
            .line("return nil")
            .close("}");
    }

    w.finish()
}
