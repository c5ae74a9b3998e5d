//! Markdown rendering of a finished coaching session.

use chrono::NaiveDateTime;

use crate::domain::entities::session::CoachSession;

const NEXT_STEPS: [&str; 3] = [
    "- 若尚未进行需求拆解，建议进入 cleanddd-requirements-analysis",
    "- 若聚合边界已明确，建议进入 cleanddd-modeling",
    "- 模型稳定后可继续 cleanddd-dotnet-init 与 cleanddd-dotnet-coding",
];

/// Render the session notes report.
///
/// Pure: the timestamp is supplied by the caller so the output is
/// reproducible.
pub fn render_report(session: &CoachSession, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    out.push_str("# CleanDDD 教练会话笔记\n");
    out.push_str(&format!(
        "日期: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "总得分: {}/{} ({}%)\n",
        session.total_score(),
        session.total_questions(),
        session.percent()
    ));

    out.push_str("\n## 学习概览\n");
    out.push_str("模块 | 得分 | 题数\n");
    out.push_str("--- | --- | ---\n");
    for row in session.modules_completed() {
        out.push_str(&format!("{} | {} | {}\n", row.title, row.score, row.questions));
    }

    out.push_str("\n## 模块笔记\n");
    for note in session.notes() {
        out.push_str(&format!("### {}\n", note.title));
        out.push_str(&note.content);
        out.push_str("\n\n");
    }

    out.push_str("## 行动建议\n");
    for step in NEXT_STEPS {
        out.push_str(step);
        out.push('\n');
    }

    out
}
