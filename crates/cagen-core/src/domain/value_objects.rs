//! Domain value objects: EntityName, IdType, Framework, DbLibrary, ArtifactKind.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `EntityName` and `IdType` are validated at construction; `Framework` and
//! `DbLibrary` never fail to parse because unrecognized values are carried
//! through as `Other` and simply match none of the template gates.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension of every generated source file.
pub const GO_FILE_EXTENSION: &str = "go";

/// Reserved words of the Go language; none of them is an identifier.
pub const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
    "package", "range", "return", "select", "struct", "switch", "type", "var",
];

fn is_keyword(word: &str) -> bool {
    GO_KEYWORDS.contains(&word)
}

// ── EntityName ───────────────────────────────────────────────────────────────

/// Name of the domain object being generated, e.g. `User`.
///
/// Invariant: a valid Go identifier. The first character is a letter or `_`,
/// the remaining characters are letters, digits or `_`, and the whole is not
/// a Go keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let mut chars = name.chars();

        let Some(first) = chars.next() else {
            return Err(DomainError::EmptyEntityName);
        };

        if !(first.is_alphabetic() || first == '_') {
            return Err(DomainError::InvalidEntityName {
                reason: format!("must start with a letter or '_', found '{first}'"),
                name,
            });
        }

        if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Err(DomainError::InvalidEntityName {
                reason: format!("contains invalid character '{bad}'"),
                name,
            });
        }

        if is_keyword(&name) {
            return Err(DomainError::InvalidEntityName {
                reason: "is a Go keyword".into(),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── IdType ───────────────────────────────────────────────────────────────────

/// Go type used for the generated `ID` field (`int64`, `string`, `uuid.UUID`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdType(String);

impl IdType {
    pub const DEFAULT: &'static str = "int64";

    pub fn new(id_type: impl Into<String>) -> Result<Self, DomainError> {
        let id_type = id_type.into();
        let trimmed = id_type.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdType {
                id_type,
                reason: "type cannot be empty".into(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidIdType {
                reason: "type cannot contain whitespace".into(),
                id_type,
            });
        }
        if is_keyword(trimmed) {
            return Err(DomainError::InvalidIdType {
                reason: "a Go keyword is not a type".into(),
                id_type,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdType {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// HTTP framework the generated controller targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Framework {
    /// Standard library `net/http` handler (`ServeHTTP`).
    #[default]
    NetHttp,
    /// labstack/echo handler (`EchoHandler`).
    Echo,
    /// Anything else; every framework-specific block is omitted.
    Other(String),
}

impl Framework {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NetHttp => "net/http",
            Self::Echo => "echo",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Framework {
    fn from(s: &str) -> Self {
        match s {
            "net/http" => Self::NetHttp,
            "echo" => Self::Echo,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DbLibrary ────────────────────────────────────────────────────────────────

/// Database access library the generated repository holds a handle to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DbLibrary {
    /// `*sql.DB` from `database/sql`.
    #[default]
    DatabaseSql,
    /// `*gorm.DB`, plus ORM tags and timestamp fields on the persisted type.
    Gorm,
    /// Anything else; every library-specific block is omitted.
    Other(String),
}

impl DbLibrary {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DatabaseSql => "database/sql",
            Self::Gorm => "gorm",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for DbLibrary {
    fn from(s: &str) -> Self {
        match s {
            "database/sql" => Self::DatabaseSql,
            "gorm" => Self::Gorm,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DbLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// One kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Entity,
    Gateway,
    Repository,
    Usecase,
    Controller,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        Self::Entity,
        Self::Gateway,
        Self::Repository,
        Self::Usecase,
        Self::Controller,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Gateway => "gateway",
            Self::Repository => "repository",
            Self::Usecase => "usecase",
            Self::Controller => "controller",
        }
    }

    /// Directory under the output root; also the Go package name.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Gateway => "gateway",
            Self::Repository => "repo",
            Self::Usecase => "usecase",
            Self::Controller => "controller",
        }
    }

    pub const fn package(&self) -> &'static str {
        self.directory()
    }

    /// Appended to the entity name to form the file stem.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Entity => "",
            Self::Gateway => "Gateway",
            Self::Repository => "Repo",
            Self::Usecase => "Usecase",
            Self::Controller => "Controller",
        }
    }

    /// The kind whose package is named `package`, if any.
    pub fn from_package(package: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.package() == package)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
