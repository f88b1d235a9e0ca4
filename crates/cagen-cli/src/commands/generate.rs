//! Shared generation flow for `gen_api` and `gen_db`.
//!
//! Responsibility: wire the adapters selected by configuration into a
//! `GenerateService`, run it, and report a dry run. Successful writes print
//! nothing to stdout; progress is logged at INFO.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use cagen_adapters::{ExternalFormatter, ExternalTool, GoFormatter, LocalFilesystem, builtin_templates};
use cagen_core::{
    application::{GenerateService, ports::SourceFormatter},
    domain::{ArtifactSet, GenerationRequest},
};

use crate::{
    cli::{OutputFormat, TargetArgs},
    config::{AppConfig, FormatterConfig, FormatterKind},
    error::CliResult,
    output::OutputManager,
};

/// Output root: `-d` if given, else the configured default.
pub fn target_dir(args: &TargetArgs, config: &AppConfig) -> PathBuf {
    args.dir
        .clone()
        .unwrap_or_else(|| config.defaults.directory.clone())
}

/// Render, format and (unless dry-run) write every artifact of `request`.
#[instrument(skip_all, fields(entity = %request.entity(), dry_run = args.dry_run))]
pub fn run(
    request: &GenerationRequest,
    args: &TargetArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let module = args.module.as_deref().or(config.defaults.module.as_deref());
    let service = GenerateService::new(
        builtin_templates::catalog(),
        formatter(&config.formatter, module),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let set = service.plan(request)?;
        return report_plan(&set, output);
    }

    let set = service.generate(request)?;
    info!(files = set.len(), root = %set.root().display(), "Artifacts written");
    Ok(())
}

/// Formatter adapter selected by configuration.
pub fn formatter(config: &FormatterConfig, module: Option<&str>) -> Box<dyn SourceFormatter> {
    let tool = match config.kind {
        FormatterKind::Builtin => {
            let formatter = match module {
                Some(module) => GoFormatter::new().with_module(module),
                None => GoFormatter::new(),
            };
            return Box::new(formatter);
        }
        FormatterKind::Goimports => ExternalTool::Goimports,
        FormatterKind::Gofmt => ExternalTool::Gofmt,
    };

    if module.is_some() {
        debug!("Module path ignored; the external formatter resolves imports itself");
    }
    let formatter = ExternalFormatter::new(tool);
    Box::new(match &config.program {
        Some(program) => formatter.with_program(program),
        None => formatter,
    })
}

fn report_plan(set: &ArtifactSet, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(set);
    }

    output.info(&format!(
        "Dry run: would write {} files under {}",
        set.len(),
        set.root().display()
    ))?;
    for artifact in set.artifacts() {
        output.print(&format!(
            "  {:<10} {} ({} bytes)",
            artifact.kind,
            artifact.path.display(),
            artifact.size()
        ))?;
    }
    Ok(())
}
