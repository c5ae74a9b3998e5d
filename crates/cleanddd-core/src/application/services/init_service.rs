//! Init Service - interactive project initialisation.
//!
//! Workflow:
//! 1. Validate every setting supplied up front (no subprocess yet)
//! 2. Ensure the template package is installed (unless skipped)
//! 3. Prompt for whatever was not supplied and build a [`ProjectConfig`]
//! 4. Show the options, confirm (unless skipped) and run the template engine

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner, Console},
        services::Prompter,
    },
    domain::{
        Choice, Database, Framework, MessageQueue, ProjectConfig, TemplateToolchain,
        normalize_project_name,
    },
    error::CoreResult,
};

/// Settings supplied on the command line. `None` means "ask".
#[derive(Debug, Clone, Default)]
pub struct InitRequest {
    pub framework: Option<String>,
    pub database: Option<String>,
    pub message_queue: Option<String>,
    pub use_aspire: Option<bool>,
    pub include_copilot_instructions: Option<bool>,
    pub project_name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub no_confirm: bool,
    pub skip_template_install: bool,
}

/// Defaults offered by the interactive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptDefaults {
    pub framework: Framework,
    pub database: Database,
    pub message_queue: MessageQueue,
    pub use_aspire: bool,
    pub include_copilot_instructions: bool,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            framework: Framework::default(),
            database: Database::default(),
            message_queue: MessageQueue::default(),
            use_aspire: true,
            include_copilot_instructions: false,
        }
    }
}

/// How an initializer run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The template engine ran and succeeded.
    Created(ProjectConfig),
    /// The user declined at the confirmation prompt; nothing was run.
    Declined {
        config: ProjectConfig,
        preview: String,
    },
}

/// Enumerated flags after validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ValidatedFlags {
    framework: Option<Framework>,
    database: Option<Database>,
    message_queue: Option<MessageQueue>,
}

/// Validate a supplied value against its allowed list; blank counts as absent.
fn validate_choice<T: Choice>(provided: Option<&str>) -> CoreResult<Option<T>> {
    match provided.filter(|value| !value.is_empty()) {
        Some(value) => Ok(Some(T::parse_choice(value)?)),
        None => Ok(None),
    }
}

/// Orchestrates option resolution and the two template engine calls.
pub struct InitService {
    console: Box<dyn Console>,
    runner: Box<dyn CommandRunner>,
    toolchain: TemplateToolchain,
    defaults: PromptDefaults,
}

impl InitService {
    /// Create a new init service with the default toolchain and prompts.
    pub fn new(console: Box<dyn Console>, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            console,
            runner,
            toolchain: TemplateToolchain::default(),
            defaults: PromptDefaults::default(),
        }
    }

    pub fn with_toolchain(mut self, toolchain: TemplateToolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn with_defaults(mut self, defaults: PromptDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Run the whole initializer. `cwd` seeds the name and directory defaults.
    #[instrument(skip_all, fields(cwd = %cwd.display()))]
    pub fn run(&self, request: &InitRequest, cwd: &Path) -> CoreResult<InitOutcome> {
        let flags = ValidatedFlags {
            framework: validate_choice(request.framework.as_deref())?,
            database: validate_choice(request.database.as_deref())?,
            message_queue: validate_choice(request.message_queue.as_deref())?,
        };
        debug!(?flags, "Supplied flags validated");

        if request.skip_template_install {
            debug!("Template install skipped");
        } else {
            self.ensure_template_installed()?;
        }

        let config = self.resolve_config(flags, request, cwd)?;
        self.show_summary(&config)?;

        let prompter = Prompter::new(self.console.as_ref());
        if !request.no_confirm {
            let question = format!("Run {} new with these options?", self.toolchain.program);
            if !prompter.prompt_bool(&question, true)? {
                let preview = self.command_line(&config.scaffold_args(&self.toolchain));
                prompter.print("")?;
                prompter.print("Command preview:")?;
                prompter.print(&preview)?;
                info!("Scaffold declined at confirmation");
                return Ok(InitOutcome::Declined { config, preview });
            }
        }

        self.scaffold(&config)?;
        Ok(InitOutcome::Created(config))
    }

    /// Install (or refresh) the template package.
    #[instrument(skip_all, fields(package = %self.toolchain.template_package))]
    pub fn ensure_template_installed(&self) -> CoreResult<()> {
        let prompter = Prompter::new(self.console.as_ref());
        let package = &self.toolchain.template_package;

        prompter.print("")?;
        prompter.print(&format!("Ensuring '{package}' is installed..."))?;

        let args = self.toolchain.install_args();
        self.invoke(&args, &format!("Installing {package}"))?;

        prompter.print(&format!("Template '{package}' is installed."))?;
        Ok(())
    }

    /// Run the template engine for `config`.
    #[instrument(skip_all, fields(project = %config.project_name()))]
    pub fn scaffold(&self, config: &ProjectConfig) -> CoreResult<()> {
        let prompter = Prompter::new(self.console.as_ref());
        let args = config.scaffold_args(&self.toolchain);

        prompter.print("")?;
        prompter.print(&format!("Running: {}", self.command_line(&args)))?;
        prompter.print("")?;

        self.invoke(&args, &format!("{} new", self.toolchain.program))?;

        info!(config = %config, "Project created");
        prompter.print("Project created successfully.")?;
        Ok(())
    }

    /// Fill every unset setting by prompting and build the configuration.
    fn resolve_config(
        &self,
        flags: ValidatedFlags,
        request: &InitRequest,
        cwd: &Path,
    ) -> CoreResult<ProjectConfig> {
        let prompter = Prompter::new(self.console.as_ref());
        let defaults = self.defaults;

        let framework = match flags.framework {
            Some(value) => value,
            None => prompter.prompt_choice(Framework::LABEL, Framework::ALL, defaults.framework)?,
        };
        let database = match flags.database {
            Some(value) => value,
            None => prompter.prompt_choice(Database::LABEL, Database::ALL, defaults.database)?,
        };
        let message_queue = match flags.message_queue {
            Some(value) => value,
            None => prompter.prompt_choice(
                MessageQueue::LABEL,
                MessageQueue::ALL,
                defaults.message_queue,
            )?,
        };

        let use_aspire = match request.use_aspire {
            Some(value) => value,
            None => prompter.prompt_bool("Enable Aspire dashboard?", defaults.use_aspire)?,
        };
        let include_copilot_instructions = match request.include_copilot_instructions {
            Some(value) => value,
            None => prompter.prompt_bool(
                "Include Copilot instructions?",
                defaults.include_copilot_instructions,
            )?,
        };

        let raw_name = match request.project_name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => name.to_owned(),
            None => {
                let dir_name = cwd
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                prompter.prompt_text("Project name", &normalize_project_name(&dir_name))?
            }
        };
        let project_name = normalize_project_name(&raw_name);

        let output_dir = match request
            .output_dir
            .as_ref()
            .filter(|d| !d.as_os_str().is_empty())
        {
            Some(dir) => dir.clone(),
            None => PathBuf::from(
                prompter.prompt_text("Output directory", &cwd.display().to_string())?,
            ),
        };

        Ok(ProjectConfig::builder()
            .framework(framework)
            .database(database)
            .message_queue(message_queue)
            .use_aspire(use_aspire)
            .include_copilot_instructions(include_copilot_instructions)
            .project_name(project_name)
            .output_dir(output_dir)
            .build())
    }

    fn show_summary(&self, config: &ProjectConfig) -> CoreResult<()> {
        let prompter = Prompter::new(self.console.as_ref());
        prompter.print("")?;
        prompter.print("Selected options:")?;
        for (key, value) in config.summary() {
            prompter.print(&format!("  {key}: {value}"))?;
        }
        Ok(())
    }

    /// Run the toolchain program with `args`, mapping outcomes to errors.
    fn invoke(&self, args: &[String], action: &str) -> CoreResult<()> {
        let program = &self.toolchain.program;
        match self.runner.run(program, args)? {
            CommandOutcome::Success => Ok(()),
            CommandOutcome::NotFound => {
                debug!(program = %program, "Executable not found");
                Err(ApplicationError::ToolNotFound {
                    program: program.clone(),
                }
                .into())
            }
            CommandOutcome::Failed { code } => {
                debug!(code, action, "External command failed");
                Err(ApplicationError::ToolFailed {
                    action: action.to_owned(),
                    command: self.command_line(args),
                    code,
                }
                .into())
            }
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.toolchain.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::Sequence;

    use super::*;
    use crate::{
        application::{
            ports::MockCommandRunner, services::prompter::support::FakeConsole,
        },
        domain::DomainError,
        error::CoreError,
    };

    struct SharedConsole(Arc<FakeConsole>);

    impl Console for SharedConsole {
        fn write_line(&self, text: &str) -> CoreResult<()> {
            self.0.write_line(text)
        }

        fn read_line(&self, prompt: &str) -> CoreResult<Option<String>> {
            self.0.read_line(prompt)
        }
    }

    fn service(inputs: &[&str], runner: MockCommandRunner) -> (InitService, Arc<FakeConsole>) {
        let console = Arc::new(FakeConsole::with_inputs(inputs));
        let service = InitService::new(Box::new(SharedConsole(console.clone())), Box::new(runner));
        (service, console)
    }

    fn full_request() -> InitRequest {
        InitRequest {
            framework: Some("net9.0".into()),
            database: Some("PostgreSQL".into()),
            message_queue: Some("Kafka".into()),
            use_aspire: Some(false),
            include_copilot_instructions: Some(true),
            project_name: Some("shop-api".into()),
            output_dir: Some(PathBuf::from("/work/shop")),
            no_confirm: true,
            skip_template_install: true,
        }
    }

    fn is_install(args: &[String]) -> bool {
        args.get(1).map(String::as_str) == Some("install")
    }

    #[test]
    fn invalid_flag_fails_before_any_subprocess() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let (service, console) = service(&[], runner);

        let request = InitRequest {
            database: Some("Oracle".into()),
            ..InitRequest::default()
        };
        let err = service.run(&request, Path::new("/work/shop")).unwrap_err();

        match err {
            CoreError::Domain(DomainError::InvalidChoice {
                setting, allowed, ..
            }) => {
                assert_eq!(setting, "Database");
                assert_eq!(allowed.len(), 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn missing_tool_at_install_stops_before_prompting() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, args| program == "dotnet" && is_install(args))
            .times(1)
            .returning(|_, _| Ok(CommandOutcome::NotFound));
        let (service, console) = service(&["2"], runner);

        let err = service
            .run(&InitRequest::default(), Path::new("/work/shop"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::ToolNotFound { .. })
        ));
        // The queued menu answer was never consumed.
        assert_eq!(console.remaining_inputs(), 1);
    }

    #[test]
    fn install_failure_mirrors_exit_code() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Ok(CommandOutcome::Failed { code: 5 }));
        let (service, _) = service(&[], runner);

        let err = service
            .run(&InitRequest::default(), Path::new("/work/shop"))
            .unwrap_err();
        assert_eq!(err.tool_exit_code(), Some(5));
    }

    #[test]
    fn flags_only_run_scaffolds_without_prompting() {
        let expected: Vec<String> = [
            "new",
            "netcorepal-web",
            "--Framework",
            "net9.0",
            "--Database",
            "PostgreSQL",
            "--MessageQueue",
            "Kafka",
            "--UseAspire",
            "false",
            "--IncludeCopilotInstructions",
            "true",
            "--name",
            "Shop.Api",
            "--output",
            "/work/shop",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(move |program, args| program == "dotnet" && args == expected.as_slice())
            .times(1)
            .returning(|_, _| Ok(CommandOutcome::Success));
        let (service, console) = service(&[], runner);

        let outcome = service.run(&full_request(), Path::new("/elsewhere")).unwrap();
        let InitOutcome::Created(config) = outcome else {
            panic!("expected Created");
        };
        assert_eq!(config.project_name(), "Shop.Api");
        assert!(
            console
                .transcript()
                .contains(&"Project created successfully.".to_string())
        );
    }

    #[test]
    fn install_runs_before_scaffold() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| is_install(args))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CommandOutcome::Success));
        runner
            .expect_run()
            .withf(|_, args| args.get(1).map(String::as_str) == Some("netcorepal-web"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CommandOutcome::Success));
        let (service, _) = service(&[], runner);

        let request = InitRequest {
            skip_template_install: false,
            ..full_request()
        };
        assert!(matches!(
            service.run(&request, Path::new("/work")),
            Ok(InitOutcome::Created(_))
        ));
    }

    #[test]
    fn interactive_defaults_come_from_cwd_and_prompts() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_, _| Ok(CommandOutcome::Success));
        // framework, database, mq, aspire, copilot, name, output, confirm
        let (service, _) = service(&["", "3", "", "n", "", "", "", "y"], runner);

        let request = InitRequest {
            skip_template_install: true,
            ..InitRequest::default()
        };
        let outcome = service.run(&request, Path::new("/work/order-service")).unwrap();
        let InitOutcome::Created(config) = outcome else {
            panic!("expected Created");
        };
        assert_eq!(config.framework(), Framework::Net10);
        assert_eq!(config.database(), Database::PostgreSQL);
        assert_eq!(config.message_queue(), MessageQueue::RabbitMQ);
        assert!(!config.use_aspire());
        assert!(!config.include_copilot_instructions());
        assert_eq!(config.project_name(), "Order.Service");
        assert_eq!(config.output_dir(), Path::new("/work/order-service"));
    }

    #[test]
    fn typed_project_name_is_normalized() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutcome::Success));
        let (service, _) = service(&["my_cool app"], runner);

        let request = InitRequest {
            project_name: None,
            ..full_request()
        };
        let Ok(InitOutcome::Created(config)) = service.run(&request, Path::new("/w")) else {
            panic!("expected Created");
        };
        assert_eq!(config.project_name(), "MyCoolApp");
    }

    #[test]
    fn declining_previews_command_and_runs_nothing() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let (service, console) = service(&["n"], runner);

        let request = InitRequest {
            no_confirm: false,
            ..full_request()
        };
        let outcome = service.run(&request, Path::new("/work")).unwrap();
        let InitOutcome::Declined { preview, .. } = outcome else {
            panic!("expected Declined");
        };
        assert!(preview.starts_with("dotnet new netcorepal-web --Framework net9.0"));
        assert!(preview.ends_with("--name Shop.Api --output /work/shop"));
        let transcript = console.transcript();
        assert!(transcript.contains(&"Command preview:".to_string()));
        assert!(transcript.contains(&"Run dotnet new with these options? [Y/n]: ".to_string()));
    }

    #[test]
    fn scaffold_failure_mirrors_exit_code() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutcome::Failed { code: 42 }));
        let (service, _) = service(&[], runner);

        let err = service.run(&full_request(), Path::new("/work")).unwrap_err();
        assert_eq!(err.tool_exit_code(), Some(42));
        assert_eq!(err.to_string(), "dotnet new failed with exit code 42");
    }

    #[test]
    fn missing_tool_at_scaffold_is_environment_error() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutcome::NotFound));
        let (service, _) = service(&[], runner);

        let err = service.run(&full_request(), Path::new("/work")).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Environment);
    }

    #[test]
    fn summary_lists_selected_options() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutcome::Success));
        let (service, console) = service(&[], runner);

        service.run(&full_request(), Path::new("/work")).unwrap();
        let transcript = console.transcript();
        let start = transcript
            .iter()
            .position(|l| l == "Selected options:")
            .unwrap();
        assert_eq!(transcript[start + 1], "  framework: net9.0");
        assert_eq!(transcript[start + 6], "  project_name: Shop.Api");
    }

    #[test]
    fn blank_flag_values_are_prompted() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandOutcome::Success));
        let (service, _) = service(&["1"], runner);

        let request = InitRequest {
            framework: Some(String::new()),
            ..full_request()
        };
        let Ok(InitOutcome::Created(config)) = service.run(&request, Path::new("/w")) else {
            panic!("expected Created");
        };
        assert_eq!(config.framework(), Framework::Net8);
    }
}
