//! `ca_gen commands` and `ca_gen flags <command>`.
//!
//! Both read the clap definition, so they can never drift from what the
//! parser accepts.

use clap::{Command, CommandFactory};
use serde::Serialize;

use crate::{
    cli::{Cli, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub name: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagInfo {
    pub short: Option<char>,
    pub long: Option<String>,
    pub value: Option<String>,
    pub help: String,
}

impl FlagInfo {
    fn usage(&self) -> String {
        let mut names = Vec::new();
        if let Some(short) = self.short {
            names.push(format!("-{short}"));
        }
        if let Some(long) = &self.long {
            names.push(format!("--{long}"));
        }
        let mut usage = names.join(", ");
        if let Some(value) = &self.value {
            usage.push_str(&format!(" <{value}>"));
        }
        usage
    }
}

/// Execute `ca_gen commands`.
pub fn list_commands(output: &OutputManager) -> CliResult<()> {
    let commands = commands();
    if output.format() == OutputFormat::Json {
        return output.json(&commands);
    }

    let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for c in &commands {
        output.print(&format!("{:<width$}  {}", c.name, c.about))?;
    }
    Ok(())
}

/// Execute `ca_gen flags <command>`.
pub fn describe_flags(command: &str, output: &OutputManager) -> CliResult<()> {
    let flags = flags(command)?;
    if output.format() == OutputFormat::Json {
        return output.json(&flags);
    }

    let usages: Vec<String> = flags.iter().map(FlagInfo::usage).collect();
    let width = usages.iter().map(String::len).max().unwrap_or(0);
    for (usage, flag) in usages.iter().zip(&flags) {
        output.print(&format!("  {usage:<width$}  {}", flag.help))?;
    }
    Ok(())
}

pub fn commands() -> Vec<CommandInfo> {
    let cli = Cli::command();
    let mut commands: Vec<CommandInfo> = cli
        .get_subcommands()
        .filter(|c| !c.is_hide_set())
        .map(|c| CommandInfo {
            name: c.get_name().to_string(),
            about: about(c),
        })
        .collect();
    commands.push(CommandInfo {
        name: "help".into(),
        about: "Print help for a command".into(),
    });
    commands
}

/// Flags of `command` (name or alias), positional arguments excluded.
pub fn flags(command: &str) -> CliResult<Vec<FlagInfo>> {
    let cli = Cli::command();
    let sub = cli
        .get_subcommands()
        .find(|c| c.get_name() == command || c.get_all_aliases().any(|a| a == command))
        .ok_or_else(|| CliError::UnknownCommand {
            name: command.to_string(),
        })?;

    Ok(sub
        .get_arguments()
        .filter(|a| !a.is_positional() && !a.is_hide_set())
        .map(|a| FlagInfo {
            short: a.get_short(),
            long: a.get_long().map(str::to_string),
            value: a
                .get_action()
                .takes_values()
                .then(|| a.get_value_names().and_then(|v| v.first()).map(|v| v.to_string()))
                .flatten(),
            help: a.get_help().map(|h| h.to_string()).unwrap_or_default(),
        })
        .collect())
}

fn about(command: &Command) -> String {
    command
        .get_about()
        .map(|a| a.to_string())
        .unwrap_or_default()
}
