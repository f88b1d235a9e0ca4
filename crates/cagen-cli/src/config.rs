//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `CAGEN_<SECTION>__<KEY>`, e.g.
//!    `CAGEN_DEFAULTS__LIBRARY=gorm`
//! 3. `--config FILE` (must exist)
//! 4. `.cagen.toml` in the current directory
//! 5. The global file under the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".cagen.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CAGEN";

/// Every settable key, in `section.key` form.
pub const KEYS: &[&str] = &[
    "defaults.directory",
    "defaults.framework",
    "defaults.id_type",
    "defaults.library",
    "defaults.gateway",
    "defaults.module",
    "formatter.kind",
    "formatter.program",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a generator flag is omitted.
    pub defaults: Defaults,
    /// Which formatter post-processes generated code.
    pub formatter: FormatterConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub directory: PathBuf,
    pub framework: String,
    pub id_type: String,
    pub library: String,
    pub gateway: bool,
    pub module: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            framework: "net/http".into(),
            id_type: "int64".into(),
            library: "database/sql".into(),
            gateway: false,
            module: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub kind: FormatterKind,
    /// Overrides the binary of an external formatter.
    pub program: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// In-process formatter; needs no Go toolchain.
    #[default]
    Builtin,
    Goimports,
    Gofmt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `explicit` is the path passed via `--config`. Unlike the implicit
    /// files it must exist, except for commands that create it
    /// (`explicit_required == false`).
    pub fn load(explicit: Option<&Path>, explicit_required: bool) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            explicit,
            explicit_required,
        )
    }

    fn load_from(
        global: &Path,
        local: &Path,
        explicit: Option<&Path>,
        explicit_required: bool,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?)
            .add_source(File::from(global).format(FileFormat::Toml).required(false))
            .add_source(File::from(local).format(FileFormat::Toml).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(explicit_required),
            );
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration value")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cagen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cagen", "cagen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, rendered as text. Unset optional keys are
    /// empty; unknown keys are `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        if !KEYS.contains(&key) {
            return None;
        }
        let value = serde_json::to_value(self).ok()?;
        let found = key.split('.').try_fold(&value, |v, part| v.get(part))?;
        Some(match found {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
