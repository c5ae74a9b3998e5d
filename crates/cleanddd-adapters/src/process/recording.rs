//! Command runner double that records calls and replays scripted outcomes.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use cleanddd_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner},
    },
    error::CoreResult,
};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Runner that never spawns anything.
///
/// Outcomes are handed out in order; once the script runs out every call
/// succeeds.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    outcomes: Arc<Mutex<VecDeque<CommandOutcome>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: impl IntoIterator<Item = CommandOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutcome> {
        let poisoned = || ApplicationError::ToolLaunch {
            program: program.to_owned(),
            reason: "recording runner lock poisoned".into(),
        };

        self.calls.lock().map_err(|_| poisoned())?.push(RecordedCall {
            program: program.to_owned(),
            args: args.to_vec(),
        });
        let next = self.outcomes.lock().map_err(|_| poisoned())?.pop_front();
        Ok(next.unwrap_or(CommandOutcome::Success))
    }
}
