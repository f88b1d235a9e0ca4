//! Output management and formatting.
//!
//! Command results go to stdout through [`OutputManager`]; diagnostics go
//! to stderr through tracing.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let no_color = args.no_color || config.output.no_color;

        Self {
            resolved_format: resolve(requested, io::stdout().is_terminal(), no_color),
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', msg, |t| t.green().to_string())
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', msg, |t| t.yellow().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', msg, |t| t.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.colored() {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    /// Pretty JSON document. Never suppressed; it is the command's result.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// `<mark> <msg>`; in color the mark is bold and both take `paint`.
    fn marked(&self, mark: char, msg: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.colored() {
            let mark = mark.to_string();
            self.print(&format!("{} {}", paint(&mark).bold(), paint(msg)))
        } else {
            self.print(&format!("{mark} {msg}"))
        }
    }

    fn colored(&self) -> bool {
        self.resolved_format == OutputFormat::Human && !self.no_color
    }
}

/// `Auto` becomes Human on a TTY with color allowed, Plain otherwise.
fn resolve(requested: OutputFormat, stdout_is_tty: bool, no_color: bool) -> OutputFormat {
    match requested {
        OutputFormat::Auto if stdout_is_tty && !no_color => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
