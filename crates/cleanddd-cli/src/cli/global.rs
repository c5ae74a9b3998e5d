//! Flags shared by `coach`, `init`, `config` and `completions`.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Repeat for more diagnostics on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Diagnostics written to stderr, never mixed into the session on stdout:
    (none)  - only problems cleanddd works around, like an unreadable config file
    -v      - which module ran, which template command was started
    -vv     - selections, resolved options, failure causes
    -vvv    - every answer typed at a prompt"
    )]
    pub verbose: u8,

    /// Silence status lines. Quiz and init prompts are still shown.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide status lines; prompts and requested values still print"
    )]
    pub quiet: bool,

    /// Plain error and status output. `NO_COLOR=1` does the same.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Print errors and status lines without color"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the per-user one.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Settings file to use; it must exist"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of `config get` and `config list`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How config values are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering for output that is not part of an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored headers and check marks.
    Human,
    /// No escape codes.
    Plain,
    /// A JSON document on stdout.
    Json,
}
