use cagen_core::domain::{ArtifactKind, RenderContext};

use crate::renderer::{Field, GoWriter};

/// Write and read-only repositories with stub method bodies.
///
/// The repositories never implement persistence; every method panics with
/// an "implement" message for the developer to fill in.
pub fn render(ctx: &RenderContext) -> String {
    let name = &ctx.name;
    let id = &ctx.id_type;
    let handle = db_handle(ctx);
    let param = if handle.is_empty() {
        "db".to_string()
    } else {
        format!("db {handle}")
    };
    let record = if ctx.has_gateway {
        format!("gateway.{name}DTO")
    } else {
        format!("entity.{name}")
    };

    let mut w = GoWriter::new(ArtifactKind::Repository.package());
    w.blank().open("type (");
    for repo in [format!("{name}Repo"), format!("RO{name}Repo")] {
        w.open(format!("{repo} struct {{"));
        w.fields(&[Field::new("db", handle)]);
        w.close("}");
    }
    w.close(")").blank();

    for repo in [format!("RO{name}Repo"), format!("{name}Repo")] {
        w.open(format!("func New{repo}({param}) *{repo} {{"))
            .open(format!("return &{repo}{{"))
            .line("db: db,")
            .close("}")
            .close("}")
            .blank();
    }

    stub_method(
        &mut w,
        &format!("r {name}Repo"),
        &format!("Create{name}"),
        &format!("ctx context.Context, dto *{record}"),
        "error",
    );
    w.blank();
    stub_method(
        &mut w,
        &format!("r {name}Repo"),
        &format!("Delete{name}"),
        &format!("ctx context.Context, id {id}"),
        "error",
    );
    w.blank();
    stub_method(
        &mut w,
        &format!("ro RO{name}Repo"),
        &format!("Fetch{name}ByID"),
        &format!("ctx context.Context, id {id}"),
        &format!("(*{record}, error)"),
    );

    w.finish()
}

fn db_handle(ctx: &RenderContext) -> &'static str {
    if ctx.is_db_sql {
        "*sql.DB"
    } else if ctx.is_gorm {
        "*gorm.DB"
    } else {
        ""
    }
}

fn stub_method(w: &mut GoWriter, receiver: &str, method: &str, params: &str, results: &str) {
    w.open(format!("func ({receiver}) {method}({params}) {results} {{"))
        .line(format!("panic(\"implement {method}\")"))
        .close("}");
}
