//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod argv;
pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ca_gen",
    bin_name = "ca_gen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean-architecture boilerplate generator for Go",
    long_about = "ca_gen writes Go clean-architecture skeletons: a usecase and a \
                  controller for the API layer, an entity, a repository and an \
                  optional gateway for the DB layer.",
    after_help = "EXAMPLES:\n\
        \x20 ca_gen gen_api -d api Order\n\
        \x20 ca_gen gen_api -fw echo -m example.com/shop Order\n\
        \x20 ca_gen gen_db -d db -id string -lib gorm -g User\n\
        \x20 ca_gen completions bash > /usr/share/bash-completion/completions/ca_gen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a usecase and a controller.
    #[command(
        name = "gen_api",
        visible_alias = "gen-api",
        about = "Generate usecase and controller",
        after_help = "EXAMPLES:\n\
            \x20 ca_gen gen_api Order                 # ./usecase, ./controller\n\
            \x20 ca_gen gen_api -d api -fw echo Order\n\
            \x20 ca_gen gen_api --dry-run --output-format json Order"
    )]
    GenApi(GenApiArgs),

    /// Generate an entity, a repository and an optional gateway.
    #[command(
        name = "gen_db",
        visible_alias = "gen-db",
        about = "Generate entity, repo and gateway",
        after_help = "EXAMPLES:\n\
            \x20 ca_gen gen_db User                   # ./entity, ./repo\n\
            \x20 ca_gen gen_db -d db -id string -lib gorm -g User"
    )]
    GenDb(GenDbArgs),

    /// List every command with a one-line summary.
    #[command(about = "List all command names")]
    Commands,

    /// List the flags of one command.
    #[command(
        about = "Describe the flags of a command",
        after_help = "EXAMPLES:\n\
            \x20 ca_gen flags gen_db"
    )]
    Flags(FlagsArgs),

    /// Initialise a cagen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ca_gen init           # global config\n\
            \x20 ca_gen init --local   # .cagen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ca_gen completions bash > ~/.local/share/bash-completion/completions/ca_gen\n\
            \x20 ca_gen completions zsh  > ~/.zfunc/_ca_gen\n\
            \x20 ca_gen completions fish > ~/.config/fish/completions/ca_gen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the cagen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ca_gen config get defaults.library\n\
            \x20 ca_gen config set defaults.library gorm\n\
            \x20 ca_gen config list"
    )]
    Config(ConfigCommands),
}

// ── gen_api / gen_db ──────────────────────────────────────────────────────────

/// Arguments shared by both generators.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Entity name; must be a Go identifier.
    #[arg(value_name = "NAME", help = "Entity name, e.g. User")]
    pub name: String,

    /// Output root; kind directories are created beneath it.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Go module path used to import sibling generated packages.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path for local imports (e.g. example.com/app)"
    )]
    pub module: Option<String>,

    /// Render and format without writing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

/// Arguments for `ca_gen gen_api`.
#[derive(Debug, Clone, Args)]
pub struct GenApiArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// HTTP framework; unknown values omit every handler.
    #[arg(
        long = "fw",
        alias = "framework",
        value_name = "FRAMEWORK",
        help = "Handler framework: net/http or echo"
    )]
    pub framework: Option<String>,
}

/// Arguments for `ca_gen gen_db`.
#[derive(Debug, Clone, Args)]
pub struct GenDbArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Go type of the `ID` field.
    #[arg(
        long = "id",
        alias = "id-type",
        value_name = "TYPE",
        help = "ID field type (default: int64)"
    )]
    pub id_type: Option<String>,

    /// Database library; unknown values omit every library block.
    #[arg(
        long = "lib",
        alias = "library",
        value_name = "LIBRARY",
        help = "Database library: database/sql or gorm"
    )]
    pub library: Option<String>,

    /// Also generate the gateway layer.
    #[arg(short = 'g', long = "gateway", help = "Generate a gateway and DTO")]
    pub gateway: bool,
}

// ── flags ─────────────────────────────────────────────────────────────────────

/// Arguments for `ca_gen flags`.
#[derive(Debug, Args)]
pub struct FlagsArgs {
    /// Command to describe.
    #[arg(value_name = "COMMAND")]
    pub command: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ca_gen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.cagen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ca_gen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ca_gen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.library`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(argv::normalize(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_gen_api() {
        let cli = parse(&["ca_gen", "gen_api", "-d", "api", "Order"]);
        let Commands::GenApi(args) = cli.command else {
            panic!("expected gen_api");
        };
        assert_eq!(args.target.name, "Order");
        assert_eq!(args.target.dir, Some(PathBuf::from("api")));
        assert_eq!(args.framework, None);
    }

    #[test]
    fn parse_gen_db_go_style() {
        let cli = parse(&[
            "ca_gen", "gen_db", "-d", "db", "-id", "string", "-lib", "gorm", "-g", "User",
        ]);
        let Commands::GenDb(args) = cli.command else {
            panic!("expected gen_db");
        };
        assert_eq!(args.id_type.as_deref(), Some("string"));
        assert_eq!(args.library.as_deref(), Some("gorm"));
        assert!(args.gateway);
        assert_eq!(args.target.name, "User");
    }

    #[test]
    fn equals_form_and_aliases() {
        let cli = parse(&["ca_gen", "gen-api", "-fw=echo", "-module=example.com/x", "O"]);
        let Commands::GenApi(args) = cli.command else {
            panic!("expected gen_api");
        };
        assert_eq!(args.framework.as_deref(), Some("echo"));
        assert_eq!(args.target.module.as_deref(), Some("example.com/x"));
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["ca_gen", "gen_db"]).is_err());
    }

    #[test]
    fn no_color_flag_sets_true() {
        assert!(parse(&["ca_gen", "--no-color", "commands"]).global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["ca_gen", "--quiet", "--verbose", "commands"]);
        assert!(result.is_err());
    }
}
