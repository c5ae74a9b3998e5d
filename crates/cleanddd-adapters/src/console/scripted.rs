//! Scripted console for tests and non-interactive runs.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use cleanddd_core::{
    application::{ApplicationError, ports::Console},
    error::CoreResult,
};

/// Console that answers prompts from a queue and records everything shown.
///
/// Clones share state, so a test can keep one handle and hand another to a
/// service.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that answers with `inputs`, then reports end-of-input.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inner = ScriptedInner {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Every line written and every prompt shown, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.lock().map(|i| i.transcript.clone()).unwrap_or_default()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock().map(|i| i.inputs.len()).unwrap_or_default()
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, ScriptedInner>> {
        self.inner.lock().map_err(|_| {
            ApplicationError::Console {
                reason: "scripted console lock poisoned".into(),
            }
            .into()
        })
    }
}

impl Console for ScriptedConsole {
    fn write_line(&self, text: &str) -> CoreResult<()> {
        self.lock()?.transcript.push(text.to_owned());
        Ok(())
    }

    fn read_line(&self, prompt: &str) -> CoreResult<Option<String>> {
        let mut inner = self.lock()?;
        inner.transcript.push(prompt.to_owned());
        Ok(inner.inputs.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_eof() {
        let console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.read_line("1? ").unwrap().as_deref(), Some("a"));
        assert_eq!(console.read_line("2? ").unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line("3? ").unwrap(), None);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn clones_share_transcript() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let handle = console.clone();
        console.write_line("hello").unwrap();
        assert_eq!(handle.transcript(), vec!["hello"]);
    }
}
