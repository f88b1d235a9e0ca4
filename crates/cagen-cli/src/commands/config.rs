//! `ca_gen config` - read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys whose values are booleans in the file.
const BOOL_KEYS: &[&str] = &["defaults.gateway", "output.no_color"];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = target_path(global);
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&target_path(global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// File that `config set` writes: `--config` when given, else the global file.
fn target_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| unknown_key(key))
}

/// Update one key in the file at `path`, keeping every other entry.
///
/// The updated document must still deserialize into [`AppConfig`]; nothing
/// is written otherwise.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let (section, field) = key
        .split_once('.')
        .filter(|_| KEYS.contains(&key))
        .ok_or_else(|| unknown_key(key))?;

    let parsed = if BOOL_KEYS.contains(&key) {
        let flag = value.parse::<bool>().map_err(|e| CliError::InvalidInput {
            message: format!("'{key}' expects true or false, got '{value}'"),
            source: Some(Box::new(e)),
        })?;
        toml::Value::Boolean(flag)
    } else {
        toml::Value::String(value.to_string())
    };

    let mut document = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let table = document
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        })?;
    table.insert(field.to_string(), parsed);

    let text = toml::to_string_pretty(&document).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::InvalidInput {
        message: format!("Invalid value '{value}' for '{key}'"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
