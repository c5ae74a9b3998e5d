//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cleanddd_core::{application::InitRequest, domain::parse_bool_arg};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cleanddd",
    bin_name = "cleanddd",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CleanDDD coach and .NET project initializer",
    long_about = "Practise CleanDDD concepts in an interactive coaching session, \
                  or initialise a NetCorePal-based .NET project through the \
                  dotnet template engine.",
    after_help = "EXAMPLES:\n\
        \x20 cleanddd coach\n\
        \x20 cleanddd init --Framework net9.0 --Database PostgreSQL --name shop-api\n\
        \x20 cleanddd config list\n\
        \x20 cleanddd completions bash > ~/.local/share/bash-completion/completions/cleanddd",
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
    /// Run an interactive coaching session and write notes.
    #[command(
        about = "Interactive CleanDDD coaching session",
        after_help = "The session is fully interactive: pick modules, answer one \
                      question per module, then choose where to write the notes."
    )]
    Coach,

    /// Initialise a .NET project from the NetCorePal template.
    #[command(
        about = "Initialise a .NET project",
        after_help = "EXAMPLES:\n\
            \x20 cleanddd init                                   # fully interactive\n\
            \x20 cleanddd init -F net9.0 -D PostgreSQL -M Kafka --name shop-api\n\
            \x20 cleanddd init --UseAspire false --no-confirm --skip-template-install"
    )]
    Init(InitArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cleanddd config get init.database\n\
            \x20 cleanddd config list\n\
            \x20 cleanddd config init --force"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cleanddd completions bash > ~/.local/share/bash-completion/completions/cleanddd\n\
            \x20 cleanddd completions zsh  > ~/.zfunc/_cleanddd\n\
            \x20 cleanddd completions fish > ~/.config/fish/completions/cleanddd.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cleanddd init`.
///
/// Enumerated settings are taken as plain strings and validated by the core
/// before anything runs, so an invalid value reports the allowed list.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(
        short = 'F',
        long = "Framework",
        value_name = "FRAMEWORK",
        help = "Target framework: net8.0, net9.0, net10.0"
    )]
    pub framework: Option<String>,

    #[arg(
        short = 'D',
        long = "Database",
        value_name = "DATABASE",
        help = "Database: MySql, SqlServer, PostgreSQL, Sqlite, GaussDB, DMDB, MongoDB"
    )]
    pub database: Option<String>,

    #[arg(
        short = 'M',
        long = "MessageQueue",
        value_name = "QUEUE",
        help = "Message queue: RabbitMQ, Kafka, AzureServiceBus, AmazonSQS, NATS, RedisStreams, Pulsar"
    )]
    pub message_queue: Option<String>,

    #[arg(
        short = 'U',
        long = "UseAspire",
        value_name = "BOOL",
        value_parser = parse_bool_flag,
        help = "Enable the Aspire dashboard (true/false, yes/no, 1/0)"
    )]
    pub use_aspire: Option<bool>,

    #[arg(
        long = "IncludeCopilotInstructions",
        value_name = "BOOL",
        value_parser = parse_bool_flag,
        help = "Include Copilot instructions (true/false, yes/no, 1/0)"
    )]
    pub include_copilot_instructions: Option<bool>,

    /// Raw project name; normalized to dotted PascalCase.
    #[arg(long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "no-confirm", help = "Run without the confirmation prompt")]
    pub no_confirm: bool,

    #[arg(
        long = "skip-template-install",
        help = "Do not install or refresh the template package first"
    )]
    pub skip_template_install: bool,
}

impl From<InitArgs> for InitRequest {
    fn from(args: InitArgs) -> Self {
        Self {
            framework: args.framework,
            database: args.database,
            message_queue: args.message_queue,
            use_aspire: args.use_aspire,
            include_copilot_instructions: args.include_copilot_instructions,
            project_name: args.name,
            output_dir: args.output,
            no_confirm: args.no_confirm,
            skip_template_install: args.skip_template_install,
        }
    }
}

fn parse_bool_flag(value: &str) -> Result<bool, String> {
    parse_bool_arg(value).map_err(|e| e.to_string())
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cleanddd completions`.
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

/// Subcommands for `cleanddd config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `init.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the built-in defaults to the configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}
