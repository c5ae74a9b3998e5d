//! Coach Service - the interactive coaching session.
//!
//! Workflow:
//! 1. Show the module menu and read a comma-separated selection
//! 2. Run each selected module in canonical order (present → quiz → score)
//! 3. Ask where to write the notes and render the report there

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Console, Filesystem},
        services::Prompter,
    },
    domain::{CoachModule, CoachSession, MODULES, expand_home, render_report},
    error::CoreResult,
};

/// Default location of the session notes.
pub const DEFAULT_NOTES_PATH: &str = "./cleanddd-coach-notes.md";

/// Parse a menu selection such as `"4, 1,4"` into the set of tokens given.
///
/// Tokens are trimmed and de-duplicated; empty tokens are dropped. No
/// validation happens here: tokens that name no module are simply never
/// looked up.
pub fn parse_selection(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Modules picked by `selection`, in canonical order.
pub fn selected_modules(selection: &BTreeSet<String>) -> Vec<&'static CoachModule> {
    MODULES
        .iter()
        .filter(|module| selection.contains(module.number))
        .collect()
}

/// Runs coaching sessions against injected console and filesystem adapters.
pub struct CoachService {
    console: Box<dyn Console>,
    filesystem: Box<dyn Filesystem>,
    home_dir: Option<PathBuf>,
    default_notes_path: String,
}

impl CoachService {
    /// Create a new coach service with the given adapters.
    ///
    /// `home_dir` is used to expand a leading `~` in the notes path.
    pub fn new(
        console: Box<dyn Console>,
        filesystem: Box<dyn Filesystem>,
        home_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            console,
            filesystem,
            home_dir,
            default_notes_path: DEFAULT_NOTES_PATH.to_owned(),
        }
    }

    /// Override the notes path offered when the user gives none.
    pub fn with_default_notes_path(mut self, path: impl Into<String>) -> Self {
        self.default_notes_path = path.into();
        self
    }

    /// Run a full interactive session and return where the notes were written.
    #[instrument(skip_all)]
    pub fn run(&self) -> CoreResult<PathBuf> {
        let prompter = Prompter::new(self.console.as_ref());

        prompter.print_heading("CleanDDD 交互式教练")?;
        prompter.print_wrapped("欢迎！请选择需要练习的模块。输入数字，多选请用逗号分隔。")?;
        for module in &MODULES {
            prompter.print(&format!("{}) {}", module.number, module.title))?;
        }

        let selection = parse_selection(&prompter.prompt_line("你的选择: ")?);
        let session = self.run_modules(&selection)?;

        let raw_path = prompter.prompt_line(&format!(
            "笔记输出文件路径（默认 {}）: ",
            self.default_notes_path
        ))?;
        let raw_path = if raw_path.is_empty() {
            self.default_notes_path.as_str()
        } else {
            raw_path.as_str()
        };
        let out_path = expand_home(raw_path, self.home_dir.as_deref());

        let written = self.write_summary(&session, &out_path)?;
        prompter.print("")?;
        prompter.print(&format!("已生成笔记: {}", written.display()))?;
        prompter.print("感谢练习！建议按笔记中的行动项继续。")?;
        Ok(written)
    }

    /// Run every selected module, in canonical order, into a fresh session.
    pub fn run_modules(&self, selection: &BTreeSet<String>) -> CoreResult<CoachSession> {
        let mut session = CoachSession::new();
        let modules = selected_modules(selection);
        debug!(
            selected = modules.len(),
            ignored = selection.len() - modules.len(),
            "Selection parsed"
        );

        for module in modules {
            self.run_module(module, &mut session)?;
        }
        Ok(session)
    }

    /// Present one module, ask its question and record the verdict.
    #[instrument(skip_all, fields(module = module.key))]
    pub fn run_module(&self, module: &CoachModule, session: &mut CoachSession) -> CoreResult<()> {
        let prompter = Prompter::new(self.console.as_ref());

        prompter.print_heading(module.heading)?;
        for paragraph in module.paragraphs {
            prompter.print_wrapped(paragraph)?;
        }
        if !module.checklist.is_empty() {
            prompter.print("检查清单：")?;
            for item in module.checklist {
                prompter.print(&format!("- {item}"))?;
            }
        }

        let answer = prompter.prompt_line(module.question)?;
        let correct = module.accepts(&answer);
        prompter.print(module.reference_answer)?;

        session.record_answer(module, &answer, correct);
        info!(correct, "Module completed");
        Ok(())
    }

    /// Render `session` and write it to `path`, replacing any existing file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_summary(&self, session: &CoachSession, path: &Path) -> CoreResult<PathBuf> {
        let report = render_report(session, Local::now().naive_local());
        self.filesystem.write_file(path, &report)?;
        info!(
            score = session.total_score(),
            questions = session.total_questions(),
            "Notes written"
        );
        Ok(path.to_path_buf())
    }
}
