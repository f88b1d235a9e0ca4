//! Implementation of `ca_gen gen_api`.
//!
//! Translates flags into an API-layer `GenerationRequest`: a usecase and a
//! controller under `<dir>/usecase` and `<dir>/controller`.

use tracing::{instrument, warn};

use cagen_core::{
    domain::{ApiOptions, EntityName, Framework, GenerationRequest},
    error::CagenError,
};

use crate::{
    cli::GenApiArgs,
    commands::generate,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.target.name))]
pub fn execute(args: GenApiArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(&args, config)?;
    generate::run(&request, &args.target, config, output)
}

fn build_request(args: &GenApiArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let entity = EntityName::new(args.target.name.as_str()).map_err(CagenError::from)?;

    let framework = Framework::from(
        args.framework
            .as_deref()
            .unwrap_or(config.defaults.framework.as_str()),
    );
    if !framework.is_known() {
        warn!(%framework, "Unknown framework; the controller gets no handler method");
    }

    Ok(GenerationRequest::api(
        entity,
        generate::target_dir(&args.target, config),
        ApiOptions { framework },
    ))
}
