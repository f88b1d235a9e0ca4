//! Implementation of `ca_gen gen_db`.
//!
//! Translates flags into a DB-layer `GenerationRequest`: an entity, a
//! repository and, with `-g`, a gateway.

use tracing::{instrument, warn};

use cagen_core::{
    domain::{DbLibrary, DbOptions, EntityName, GenerationRequest, IdType},
    error::CagenError,
};

use crate::{
    cli::GenDbArgs,
    commands::generate,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.target.name))]
pub fn execute(args: GenDbArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(&args, config)?;
    generate::run(&request, &args.target, config, output)
}

fn build_request(args: &GenDbArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let entity = EntityName::new(args.target.name.as_str()).map_err(CagenError::from)?;

    let id_type = IdType::new(
        args.id_type
            .as_deref()
            .unwrap_or(config.defaults.id_type.as_str()),
    )
    .map_err(CagenError::from)?;

    let library = DbLibrary::from(
        args.library
            .as_deref()
            .unwrap_or(config.defaults.library.as_str()),
    );
    if !library.is_known() {
        warn!(%library, "Unknown database library; repositories get an untyped handle");
    }

    Ok(GenerationRequest::db(
        entity,
        generate::target_dir(&args.target, config),
        DbOptions {
            id_type,
            library,
            include_gateway: args.gateway || config.defaults.gateway,
        },
    ))
}
