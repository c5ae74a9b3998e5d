//! `cleanddd config`: inspect and create the configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override, if any.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            match output.format() {
                OutputFormat::Json => output.data(&json(&serde_json::json!({ key: value }))?)?,
                _ => output.data(&value)?,
            }
        }

        ConfigCommands::List => match output.format() {
            OutputFormat::Json => output.data(&json(&config)?)?,
            _ => {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.data(serialised.trim_end())?;
            }
        },

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            write_defaults(&path, force)?;
            output.success(&format!("Wrote default configuration to {}", path.display()))?;
            output.print("Edit it, then check the result with 'cleanddd config list'.")?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "init.framework" => config.init.framework.to_string(),
        "init.database" => config.init.database.to_string(),
        "init.message_queue" => config.init.message_queue.to_string(),
        "init.use_aspire" => config.init.use_aspire.to_string(),
        "init.include_copilot_instructions" => config.init.include_copilot_instructions.to_string(),
        "toolchain.program" => config.toolchain.program.clone(),
        "toolchain.template_package" => config.toolchain.template_package.clone(),
        "toolchain.template_name" => config.toolchain.template_name.clone(),
        "coach.notes_path" => config.coach.notes_path.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, AppConfig::default_toml()?)
        .with_cli_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "Default configuration written");
    Ok(())
}

fn json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
