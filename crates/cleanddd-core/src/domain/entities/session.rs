//! In-memory aggregation of one coaching run.

use serde::Serialize;

use crate::domain::entities::coach_module::CoachModule;

/// Score row for one completed module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    pub title: String,
    pub score: u32,
    pub questions: u32,
}

/// Free-text note recorded for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionNote {
    pub title: String,
    pub content: String,
}

/// Results of one coaching run.
///
/// The only mutator is [`CoachSession::record_answer`], which adds exactly
/// one question and at most one point, so `total_score <= total_questions`
/// always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoachSession {
    modules_completed: Vec<ModuleResult>,
    notes: Vec<SessionNote>,
    total_score: u32,
    total_questions: u32,
}

impl CoachSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer given to `module`'s question and its verdict.
    pub fn record_answer(&mut self, module: &CoachModule, answer: &str, correct: bool) {
        let score = u32::from(correct);

        self.notes.push(SessionNote {
            title: module.title.to_owned(),
            content: format!(
                "小测回答：{answer}；正确：{}",
                if correct { "是" } else { "否" }
            ),
        });
        self.modules_completed.push(ModuleResult {
            title: module.title.to_owned(),
            score,
            questions: 1,
        });
        self.total_score += score;
        self.total_questions += 1;
    }

    pub fn modules_completed(&self) -> &[ModuleResult] {
        &self.modules_completed
    }

    pub fn notes(&self) -> &[SessionNote] {
        &self.notes
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Percentage score, rounded; an empty session scores 0.
    pub fn percent(&self) -> u32 {
        let denominator = f64::from(self.total_questions.max(1));
        (100.0 * f64::from(self.total_score) / denominator).round() as u32
    }
}
