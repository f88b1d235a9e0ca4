//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level: none = warn, -v = info, -vv = debug, -vvv = trace.
    ///
    /// At info every written file is logged; trace shows how each import in
    /// the generated code was resolved.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors reach stderr; informational stdout lines are dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only report errors"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>). Any value other
    /// than an empty or falsey one (`0`, `false`, `no`, `off`) turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Never emit ANSI colors"
    )]
    pub no_color: bool,

    /// Read this TOML file after the global and local ones; it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Extra configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "Result format on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a color terminal, `plain` otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    /// Pretty-printed JSON documents (dry-run plans, command lists).
    Json,
}
