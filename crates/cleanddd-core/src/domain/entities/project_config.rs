//! The resolved initializer configuration and the template engine it targets.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Choice, Database, Framework, MessageQueue};

/// Where the project template comes from and how to invoke it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateToolchain {
    /// Executable of the template engine, looked up on `PATH`.
    pub program: String,
    /// Package that provides the template.
    pub template_package: String,
    /// Short name of the template inside the package.
    pub template_name: String,
}

impl Default for TemplateToolchain {
    fn default() -> Self {
        Self {
            program: "dotnet".into(),
            template_package: "NetCorePal.Template".into(),
            template_name: "netcorepal-web".into(),
        }
    }
}

impl TemplateToolchain {
    /// Arguments that install (or refresh) the template package.
    pub fn install_args(&self) -> Vec<String> {
        vec!["new".into(), "install".into(), self.template_package.clone()]
    }
}

/// Fully resolved choices for one initializer run.
///
/// Built once every setting is validated and normalized; there are no
/// setters, a correction means building a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    framework: Framework,
    database: Database,
    message_queue: MessageQueue,
    use_aspire: bool,
    include_copilot_instructions: bool,
    project_name: String,
    output_dir: PathBuf,
}

impl ProjectConfig {
    /// Start building a configuration.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn message_queue(&self) -> MessageQueue {
        self.message_queue
    }

    pub fn use_aspire(&self) -> bool {
        self.use_aspire
    }

    pub fn include_copilot_instructions(&self) -> bool {
        self.include_copilot_instructions
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `(key, value)` pairs in display order, used for the options summary.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("framework", self.framework.to_string()),
            ("database", self.database.to_string()),
            ("message_queue", self.message_queue.to_string()),
            ("use_aspire", self.use_aspire.to_string()),
            (
                "include_copilot_instructions",
                self.include_copilot_instructions.to_string(),
            ),
            ("project_name", self.project_name.clone()),
            ("output_dir", self.output_dir.display().to_string()),
        ]
    }

    /// Arguments that scaffold this configuration with the given toolchain.
    pub fn scaffold_args(&self, toolchain: &TemplateToolchain) -> Vec<String> {
        vec![
            "new".into(),
            toolchain.template_name.clone(),
            "--Framework".into(),
            self.framework.as_str().into(),
            "--Database".into(),
            self.database.as_str().into(),
            "--MessageQueue".into(),
            self.message_queue.as_str().into(),
            "--UseAspire".into(),
            self.use_aspire.to_string(),
            "--IncludeCopilotInstructions".into(),
            self.include_copilot_instructions.to_string(),
            "--name".into(),
            self.project_name.clone(),
            "--output".into(),
            self.output_dir.display().to_string(),
        ]
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.project_name, self.framework, self.database, self.message_queue
        )
    }
}

/// Builder for [`ProjectConfig`].
///
/// Unset enumerated fields fall back to their defaults; the project name and
/// output directory are taken as given, so callers normalize first.
#[derive(Debug, Default)]
pub struct ProjectConfigBuilder {
    framework: Option<Framework>,
    database: Option<Database>,
    message_queue: Option<MessageQueue>,
    use_aspire: Option<bool>,
    include_copilot_instructions: Option<bool>,
    project_name: Option<String>,
    output_dir: Option<PathBuf>,
}

impl ProjectConfigBuilder {
    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn message_queue(mut self, message_queue: MessageQueue) -> Self {
        self.message_queue = Some(message_queue);
        self
    }

    pub fn use_aspire(mut self, use_aspire: bool) -> Self {
        self.use_aspire = Some(use_aspire);
        self
    }

    pub fn include_copilot_instructions(mut self, include: bool) -> Self {
        self.include_copilot_instructions = Some(include);
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> ProjectConfig {
        ProjectConfig {
            framework: self.framework.unwrap_or_default(),
            database: self.database.unwrap_or_default(),
            message_queue: self.message_queue.unwrap_or_default(),
            use_aspire: self.use_aspire.unwrap_or(true),
            include_copilot_instructions: self.include_copilot_instructions.unwrap_or(false),
            project_name: self.project_name.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
