//! Formatting through an installed Go tool.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use cagen_core::{
    application::{ApplicationError, ports::SourceFormatter},
    error::{CagenError, CagenResult},
};
use tracing::debug;

/// Overrides the formatter binary without touching `PATH`.
pub const PROGRAM_ENV: &str = "CAGEN_FORMATTER_BIN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    /// Formats and resolves imports; receives `-srcdir` so module-local
    /// packages can be found.
    Goimports,
    Gofmt,
}

impl ExternalTool {
    pub const fn default_program(&self) -> &'static str {
        match self {
            Self::Goimports => "goimports",
            Self::Gofmt => "gofmt",
        }
    }
}

/// Pipes source through `goimports` or `gofmt` on stdin/stdout.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    tool: ExternalTool,
    program: String,
}

impl ExternalFormatter {
    pub fn new(tool: ExternalTool) -> Self {
        Self {
            tool,
            program: tool.default_program().to_string(),
        }
    }

    pub fn goimports() -> Self {
        Self::new(ExternalTool::Goimports)
    }

    pub fn gofmt() -> Self {
        Self::new(ExternalTool::Gofmt)
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn tool(&self) -> ExternalTool {
        self.tool
    }

    /// The binary to run; [`PROGRAM_ENV`] wins over the configured program.
    pub fn program(&self) -> String {
        std::env::var(PROGRAM_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.program.clone())
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(self.program());
        if self.tool == ExternalTool::Goimports {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                cmd.arg("-srcdir").arg(dir);
            }
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl SourceFormatter for ExternalFormatter {
    fn format(&self, path: &Path, source: &str) -> CagenResult<String> {
        let failed = |reason: String| -> CagenError {
            ApplicationError::FormatFailed {
                path: path.to_path_buf(),
                reason,
            }
            .into()
        };

        let program = self.program();
        debug!(%program, path = %path.display(), "Running external formatter");

        let mut child = self
            .command(path)
            .spawn()
            .map_err(|e| failed(format!("failed to run {program}: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| failed(format!("failed to write to {program}: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| failed(format!("failed to wait for {program}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(failed(if stderr.is_empty() {
                format!("{program} exited with {}", output.status)
            } else {
                stderr.replace("<standard input>", &path.display().to_string())
            }));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| failed(format!("{program} produced invalid UTF-8: {e}")))
    }
}
