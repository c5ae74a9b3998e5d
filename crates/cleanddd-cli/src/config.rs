//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the pieces it needs
//! ([`PromptDefaults`], [`TemplateToolchain`], the notes path).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CLEANDDD__<SECTION>__<KEY>`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use cleanddd_core::{
    application::{PromptDefaults, services::DEFAULT_NOTES_PATH},
    domain::{Database, Framework, MessageQueue, TemplateToolchain},
};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CLEANDDD";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults offered by the initializer prompts.
    pub init: InitDefaults,
    /// Template engine invocation.
    pub toolchain: TemplateToolchain,
    /// Coaching session settings.
    pub coach: CoachConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitDefaults {
    pub framework: Framework,
    pub database: Database,
    pub message_queue: MessageQueue,
    pub use_aspire: bool,
    pub include_copilot_instructions: bool,
}

impl Default for InitDefaults {
    fn default() -> Self {
        let prompts = PromptDefaults::default();
        Self {
            framework: prompts.framework,
            database: prompts.database,
            message_queue: prompts.message_queue,
            use_aspire: prompts.use_aspire,
            include_copilot_instructions: prompts.include_copilot_instructions,
        }
    }
}

impl InitDefaults {
    pub fn prompt_defaults(&self) -> PromptDefaults {
        PromptDefaults {
            framework: self.framework,
            database: self.database,
            message_queue: self.message_queue,
            use_aspire: self.use_aspire,
            include_copilot_instructions: self.include_copilot_instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Notes path offered when the user enters none. May start with `~`.
    pub notes_path: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            notes_path: DEFAULT_NOTES_PATH.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cleanddd.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cleanddd", "cleanddd")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cleanddd.toml"))
    }

    /// The built-in defaults rendered as a TOML document.
    pub fn default_toml() -> CliResult<String> {
        toml::to_string_pretty(&Self::default()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::tempdir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_prompt_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.init.prompt_defaults(), PromptDefaults::default());
        assert_eq!(cfg.toolchain.program, "dotnet");
        assert_eq!(cfg.coach.notes_path, "./cleanddd-coach-notes.md");
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_config_error() {
        let dir = tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml"), true, no_env()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[init]\ndatabase = \"PostgreSQL\"\nuse_aspire = false\n\n[coach]\nnotes_path = \"~/ddd.md\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.init.database, Database::PostgreSQL);
        assert!(!cfg.init.use_aspire);
        assert_eq!(cfg.init.framework, Framework::Net10);
        assert_eq!(cfg.coach.notes_path, "~/ddd.md");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nprogram = \"dotnet8\"\n").unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).separator("__").source(Some(
            HashMap::from([("CLEANDDD__TOOLCHAIN__PROGRAM".to_string(), "/opt/dotnet".to_string())]),
        ));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.toolchain.program, "/opt/dotnet");
    }

    #[test]
    fn unknown_enum_value_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[init]\ndatabase = \"Oracle\"\n").unwrap();

        let err = AppConfig::load_from(&path, true, no_env()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn default_toml_round_trips() {
        let text = AppConfig::default_toml().unwrap();
        assert!(text.contains("[toolchain]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
