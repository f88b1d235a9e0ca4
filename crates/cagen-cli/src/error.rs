//! Error handling for the cagen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use cagen_core::error::CagenError;

pub use cagen_core::error::ErrorCategory as CoreCategory;

use crate::config::KEYS;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `flags` was asked about a command that does not exist.
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `cagen-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] CagenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structured output could not be produced.
    #[error("Failed to serialise output: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        CliError::Serialization { source }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::UnknownCommand { name } => vec![
                format!("'{}' is not a ca_gen command", name),
                "List available commands: ca_gen commands".into(),
            ],

            Self::ConfigError { message, .. } => {
                let mut suggestions = vec![
                    format!("Configuration issue: {}", message),
                    "Check your config file (ca_gen config path)".into(),
                    "Use 'ca_gen init --force' to recreate a default config".into(),
                ];
                if message.contains("key") {
                    suggestions.push(format!("Known keys: {}", KEYS.join(", ")));
                }
                suggestions
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Serialization { .. } => vec![
                "This appears to be a bug in cagen".into(),
                "Retry with --output-format plain".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::UnknownCommand { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Multi-line report for stderr, with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose, true)
    }

    /// Multi-line report for stderr, without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose, false)
    }

    /// Messages of every source below this error, outermost first.
    fn causes(&self) -> Vec<String> {
        std::iter::successors(self.source(), |e| (*e).source())
            .map(ToString::to_string)
            .collect()
    }

    fn report(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_string() }
        };

        let mut lines = vec![
            String::new(),
            format!(
                "{} {self}",
                paint("Error:", |t| t.red().bold().to_string())
            ),
        ];

        if verbose {
            lines.extend(
                self.causes()
                    .iter()
                    .map(|c| format!("  Caused by: {}", paint(c, |t| t.dimmed().to_string()))),
            );
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", |t| t.yellow().bold().to_string()));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Use -v / --verbose for more details.", |t| {
                t.dimmed().to_string()
            }));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Emit one tracing event; user mistakes are warnings, the rest errors.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Command rejected")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Command failed")
            }
        }

        for cause in self.causes() {
            tracing::debug!(%cause, "Caused by");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// There is no blanket impl; it would overlap both concrete impls.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, CagenError> {
    /// Core errors already carry their context; the message is dropped.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use cagen_core::{application::ApplicationError, domain::DomainError};

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unknown_command_suggests_listing() {
        let err = CliError::UnknownCommand {
            name: "gen_web".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("ca_gen commands")));
    }

    #[test]
    fn unknown_config_key_lists_known_keys() {
        let err = CliError::ConfigError {
            message: "Unknown config key: 'x'".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("defaults.library")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(DomainError::EmptyEntityName.into());
        assert_eq!(
            err.suggestions(),
            CagenError::from(DomainError::EmptyEntityName).suggestions()
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        assert_eq!(CliError::Core(DomainError::EmptyEntityName.into()).exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::UnknownCommand { name: "x".into() }.exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let format_failed = ApplicationError::FormatFailed {
            path: PathBuf::from("a/entity/A.go"),
            reason: "1:1: expected 'package'".into(),
        };
        assert_eq!(CliError::Core(format_failed.into()).exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Core(DomainError::EmptyEntityName.into());
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_colored_has_same_text_when_stripped() {
        let err = CliError::UnknownCommand { name: "x".into() };
        let colored = err.format_colored(false);
        assert!(colored.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&colored), err.format_plain(false));
    }

    #[test]
    fn verbose_report_walks_the_whole_cause_chain() {
        let inner = io::Error::other("disk full");
        let outer = io::Error::other(CliError::IoError {
            message: "writing repo".into(),
            source: inner,
        });
        let err = CliError::IoError {
            message: "generation".into(),
            source: outer,
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: I/O error: writing repo"));
        assert!(s.contains("Caused by: disk full"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_core_error() {
        let result: Result<(), CagenError> = Err(DomainError::EmptyEntityName.into());
        let cli = result.with_cli_context(|| "ignored");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}
