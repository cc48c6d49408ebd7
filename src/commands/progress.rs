//! Progress commands - reports and reset

use conjuga::core::services::{Action, Outcome, class_summary};
use conjuga::output::{ClassResult, OperationResult, ProgressResult};

use super::{Context, resolve_student};

/// Show one student's progress, or the class summary
pub fn progress(ctx: &Context, student: Option<&str>, window: Option<usize>, class: bool) -> anyhow::Result<()> {
    let book = ctx.open();

    if class {
        ClassResult {
            rows: class_summary(book.attempts(), book.roster()),
        }
        .render(ctx.mode);
        return Ok(());
    }

    let (id, name) = resolve_student(&book, student)?;
    let window = window.filter(|w| *w > 0).unwrap_or_else(|| ctx.config.window());
    ProgressResult {
        student: name,
        summary: book.summary(&id),
        window,
        by_tense: book.breakdown(&id, window),
    }
    .render(ctx.mode);
    Ok(())
}

/// Drop a student's attempts
pub fn reset_progress(ctx: &Context, student: Option<String>) -> anyhow::Result<()> {
    let mut book = ctx.open();
    if let Outcome::ProgressReset { student, removed } = book.dispatch(Action::ResetProgress { student })? {
        let name = book.student(&student).map_or_else(|| student.clone(), |s| s.name.clone());
        OperationResult::ok(format!("Removed {removed} attempt(s) for {name}")).render(ctx.mode);
    }
    Ok(())
}
