//! Built-in Go formatter.
//!
//! Needs no Go toolchain. Rejects lexically invalid text, inserts the
//! imports the file references and normalizes whitespace. Everything else
//! about layout is already canonical because the templates are written
//! through [`GoWriter`](crate::renderer::GoWriter).

use std::path::Path;

use cagen_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::CagenResult,
};
use tracing::{debug, trace};

use super::imports::{self, ImportSpec};
use super::lexer::{self, SyntaxError};

#[derive(Debug, Clone, Default)]
pub struct GoFormatter {
    module: Option<String>,
}

impl GoFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve sibling generated packages under this Go module path.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        let module = module.into();
        self.module = (!module.trim().is_empty()).then(|| module.trim().to_string());
        self
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    fn with_imports(&self, path: &Path, source: &str) -> Result<String, SyntaxError> {
        let scan = lexer::scan(source)?;
        let own = scan.tokens.get(1).and_then(|t| t.ident()).unwrap_or_default();
        let found = imports::existing(&scan.tokens);

        let mut specs = found.specs.clone();
        for qualifier in imports::referenced(&scan.tokens) {
            if qualifier == own || specs.iter().any(|s| s.binding() == Some(qualifier.as_str())) {
                continue;
            }
            match imports::resolve(&qualifier, self.module(), path) {
                Some(import) => {
                    trace!(%qualifier, %import, "Resolved import");
                    specs.push(ImportSpec::new(import));
                }
                None => debug!(%qualifier, path = %path.display(), "Unresolved qualifier"),
            }
        }

        if specs.is_empty() {
            return Ok(source.to_string());
        }

        let block = imports::render_block(&specs);
        let spliced = match found.span {
            Some((start, end)) => format!("{}{}{}", &source[..start], block, &source[end..]),
            None => {
                let at = scan.tokens.get(1).map_or(0, |t| t.end);
                format!("{}\n\n{}\n{}", &source[..at], block, &source[at..])
            }
        };
        Ok(spliced)
    }
}

impl SourceFormatter for GoFormatter {
    fn format(&self, path: &Path, source: &str) -> CagenResult<String> {
        let failed = |e: SyntaxError| ApplicationError::FormatFailed {
            path: path.to_path_buf(),
            reason: format!("{}:{}", path.display(), e),
        };

        let source = source.replace("\r\n", "\n");
        let with_imports = self.with_imports(path, &source).map_err(failed)?;
        let scan = lexer::scan(&with_imports).map_err(failed)?;
        Ok(normalize(&with_imports, &scan.verbatim_lines))
    }
}

/// Strip trailing whitespace, collapse blank-line runs, drop leading blank
/// lines and end with exactly one newline. Lines inside multi-line raw
/// strings or block comments are left alone.
pub fn normalize(source: &str, verbatim_lines: &[(usize, usize)]) -> String {
    let verbatim = |n: usize| verbatim_lines.iter().any(|&(s, e)| n >= s && n <= e);

    let mut out = String::with_capacity(source.len());
    let mut previous_blank = true;
    for (i, line) in source.split('\n').enumerate() {
        if verbatim(i + 1) {
            out.push_str(line);
            out.push('\n');
            previous_blank = false;
            continue;
        }
        let line = line.trim_end();
        if line.is_empty() {
            if !previous_blank {
                out.push('\n');
            }
            previous_blank = true;
            continue;
        }
        out.push_str(line);
        out.push('\n');
        previous_blank = false;
    }

    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use cagen_core::error::CagenError;

    use super::*;

    fn fmt(src: &str) -> String {
        GoFormatter::new()
            .format(Path::new("db/entity/User.go"), src)
            .unwrap()
    }

    #[test]
    fn inserts_single_import() {
        let out = fmt("package entity\n\ntype User struct {\n\tAt time.Time\n}\n");
        assert_eq!(
            out,
            "package entity\n\nimport \"time\"\n\ntype User struct {\n\tAt time.Time\n}\n"
        );
    }

    #[test]
    fn groups_standard_library_first() {
        let out = GoFormatter::new()
            .format(
                Path::new("db/repo/UserRepo.go"),
                "package repo\n\nfunc f(ctx context.Context, db *gorm.DB, s *sql.DB) {}\n",
            )
            .unwrap();
        assert!(out.starts_with(
            "package repo\n\nimport (\n\t\"context\"\n\t\"database/sql\"\n\n\t\"gorm.io/gorm\"\n)\n\nfunc f("
        ));
    }

    #[test]
    fn local_packages_need_a_module() {
        let src = "package repo\n\nvar x *gateway.UserDTO\n";
        let path = Path::new("db/repo/UserRepo.go");

        let bare = GoFormatter::new().format(path, src).unwrap();
        assert!(!bare.contains("import"));

        let out = GoFormatter::new()
            .with_module("example.com/shop")
            .format(path, src)
            .unwrap();
        assert!(out.contains("import \"example.com/shop/db/gateway\"\n"));
    }

    #[test]
    fn existing_imports_are_merged() {
        let out = fmt("package entity\n\nimport \"fmt\"\n\nvar a = fmt.Sprint(time.Now())\n");
        assert!(out.contains("import (\n\t\"fmt\"\n\t\"time\"\n)\n\nvar a"));
    }

    #[test]
    fn aliased_import_satisfies_its_qualifier() {
        let out = fmt("package entity\n\nimport t \"time\"\n\nvar a t.Time\n");
        assert_eq!(out, "package entity\n\nimport t \"time\"\n\nvar a t.Time\n");
    }

    #[test]
    fn own_package_is_not_imported() {
        let out = fmt("package entity\n\nvar a = entity.User{}\n");
        assert!(!out.contains("import"));
    }

    #[test]
    fn normalizes_whitespace() {
        let out = fmt("\n\npackage entity   \n\n\n\ntype A struct{}\t\n\n\n");
        assert_eq!(out, "package entity\n\ntype A struct{}\n");
    }

    #[test]
    fn raw_string_content_is_preserved() {
        let src = "package entity\n\nvar s = `a  \n\n\nb`\n";
        assert_eq!(fmt(src), src);
    }

    #[test]
    fn syntax_error_carries_position() {
        let err = GoFormatter::new()
            .format(Path::new("api/usecase/XUsecase.go"), "package usecase\n\nfunc f() {\n")
            .unwrap_err();
        match err {
            CagenError::Application(ApplicationError::FormatFailed { reason, .. }) => {
                assert_eq!(reason, "api/usecase/XUsecase.go:4:1: expected '}', found 'EOF'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_module_is_ignored() {
        assert_eq!(GoFormatter::new().with_module("  ").module(), None);
    }
}
