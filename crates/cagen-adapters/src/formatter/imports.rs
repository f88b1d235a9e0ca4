//! Import resolution for generated Go files.
//!
//! Works the way goimports does for the small, fixed vocabulary the
//! templates use: every `pkg.Name` selector whose qualifier is not already
//! imported is looked up among the well-known packages, then among the
//! sibling generated packages when a module path is known.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use cagen_core::domain::ArtifactKind;

use super::lexer::{Token, TokenKind};

/// Qualifier to import path for packages the templates reference.
pub const WELL_KNOWN: &[(&str, &str)] = &[
    ("context", "context"),
    ("time", "time"),
    ("http", "net/http"),
    ("sql", "database/sql"),
    ("gorm", "gorm.io/gorm"),
    ("echo", "github.com/labstack/echo/v4"),
    ("uuid", "github.com/google/uuid"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    /// Name the import binds in the file, if it binds one.
    pub fn binding(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some("_") | Some(".") => None,
            Some(name) => Some(name),
            None => Some(default_name(&self.path)),
        }
    }

    fn is_std(&self) -> bool {
        !self.path.split('/').next().unwrap_or("").contains('.')
    }

    fn render(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} \"{}\"", self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

/// Package name of an import path: its last element, skipping a major
/// version suffix such as `/v4`.
pub fn default_name(path: &str) -> &str {
    let mut parts = path.rsplit('/');
    let last = parts.next().unwrap_or(path);
    let is_version = last.len() > 1
        && last.starts_with('v')
        && last[1..].bytes().all(|b| b.is_ascii_digit());
    match parts.next() {
        Some(prev) if is_version => prev,
        _ => last,
    }
}

/// Import declarations directly after the package clause.
#[derive(Debug, Default)]
pub struct ExistingImports {
    pub specs: Vec<ImportSpec>,
    /// Byte range covering every import declaration.
    pub span: Option<(usize, usize)>,
}

pub fn existing(tokens: &[Token]) -> ExistingImports {
    let mut out = ExistingImports::default();
    let mut i = 2;
    while i < tokens.len() {
        if tokens[i].is_punct(';') {
            i += 1;
            continue;
        }
        if tokens[i].ident() != Some("import") {
            break;
        }
        let start = tokens[i].start;
        i += 1;
        let grouped = tokens.get(i).is_some_and(|t| t.is_punct('('));
        if grouped {
            i += 1;
        }
        while i < tokens.len() {
            let t = &tokens[i];
            if grouped && t.is_punct(')') {
                i += 1;
                break;
            }
            if t.is_punct(';') {
                i += 1;
                continue;
            }
            let name = match &t.kind {
                TokenKind::Ident(n) => Some(n.clone()),
                TokenKind::Punct('.') => Some(".".to_string()),
                _ => None,
            };
            if name.is_some() {
                i += 1;
            }
            if let Some(TokenKind::Literal(lit)) = tokens.get(i).map(|t| &t.kind) {
                out.specs.push(ImportSpec {
                    name,
                    path: lit.trim_matches(|c| c == '"' || c == '`').to_string(),
                });
            }
            i += 1;
            if !grouped {
                break;
            }
        }
        let end = tokens[..i.min(tokens.len())]
            .last()
            .map_or(start, |t| t.end);
        out.span = Some(out.span.map_or((start, end), |(s, _)| (s, end)));
    }
    out
}

/// Qualifiers of `pkg.Name` selectors, outside strings and comments.
///
/// A selector that itself follows a `.` (`u.usecase.Exec`) is a field
/// access, not a package reference.
pub fn referenced(tokens: &[Token]) -> BTreeSet<String> {
    tokens
        .windows(3)
        .enumerate()
        .filter(|(i, w)| {
            w[1].is_punct('.')
                && w[2].ident().is_some()
                && (*i == 0 || !tokens[i - 1].is_punct('.'))
        })
        .filter_map(|(_, w)| w[0].ident().map(str::to_string))
        .collect()
}

/// Import path for `qualifier` referenced from the file at `file`.
///
/// Generated packages resolve to `<module>/<output dir>/<package>`, where
/// the output dir is the file's grandparent. An absolute or parent-relative
/// output dir cannot be expressed inside the module and stays unresolved.
pub fn resolve(qualifier: &str, module: Option<&str>, file: &Path) -> Option<String> {
    if let Some((_, path)) = WELL_KNOWN.iter().find(|(q, _)| *q == qualifier) {
        return Some((*path).to_string());
    }

    let kind = ArtifactKind::from_package(qualifier)?;
    let module = module?.trim_end_matches('/');
    let root = file.parent()?.parent()?;

    let mut parts = vec![module.to_string()];
    for component in root.components() {
        match component {
            Component::Normal(s) => parts.push(s.to_str()?.to_string()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    parts.push(kind.directory().to_string());
    Some(parts.join("/"))
}

/// A goimports-style declaration: standard library group first, then
/// everything else, each sorted by path.
pub fn render_block(specs: &[ImportSpec]) -> String {
    let mut seen = BTreeSet::new();
    let mut stdlib = Vec::new();
    let mut other = Vec::new();
    for spec in specs {
        if !seen.insert(&spec.path) {
            continue;
        }
        if spec.is_std() {
            stdlib.push(spec);
        } else {
            other.push(spec);
        }
    }
    stdlib.sort_by(|a, b| a.path.cmp(&b.path));
    other.sort_by(|a, b| a.path.cmp(&b.path));

    if stdlib.len() + other.len() == 1 {
        let only = stdlib.first().or(other.first()).map_or(String::new(), |s| s.render());
        return format!("import {only}");
    }

    let mut out = String::from("import (\n");
    for spec in &stdlib {
        out.push_str(&format!("\t{}\n", spec.render()));
    }
    if !stdlib.is_empty() && !other.is_empty() {
        out.push('\n');
    }
    for spec in &other {
        out.push_str(&format!("\t{}\n", spec.render()));
    }
    out.push(')');
    out
}
