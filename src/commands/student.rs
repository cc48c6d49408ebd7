//! Student command - login, logout, roster

use conjuga::core::services::{Action, Outcome};
use conjuga::output::{OperationResult, OutputMode, StudentInfo, StudentListResult};

use super::Context;
use crate::cli::StudentAction;

/// Handle student subcommands
pub fn student(ctx: &Context, action: StudentAction) -> anyhow::Result<()> {
    let mut book = ctx.open();
    match action {
        StudentAction::Login { name } => {
            if let Outcome::LoggedIn { student, created } = book.dispatch(Action::Login { name })? {
                let message = if created {
                    format!("Welcome, {}! Your progress will be saved under this name.", student.name)
                } else {
                    format!("Welcome back, {}.", student.name)
                };
                OperationResult::ok(message).render(ctx.mode);
            }
        },
        StudentAction::Logout => {
            if let Outcome::LoggedOut(previous) = book.dispatch(Action::Logout)? {
                let message = previous.map_or_else(
                    || "Nobody was logged in.".to_string(),
                    |s| format!("Logged out {}.", s.name),
                );
                OperationResult::ok(message).render(ctx.mode);
            }
        },
        StudentAction::List => {
            let students = book
                .roster()
                .iter()
                .map(|s| StudentInfo {
                    student: s.clone(),
                    summary: book.summary(&s.id),
                })
                .collect();
            StudentListResult {
                active: book.active_student().map(|s| s.id.clone()),
                students,
            }
            .render(ctx.mode);
        },
        StudentAction::Whoami => match (book.active_student(), ctx.mode) {
            (Some(student), OutputMode::Json) => {
                println!("{}", serde_json::to_string_pretty(student)?);
            },
            (Some(student), OutputMode::Human) => println!("{}", student.name),
            (None, OutputMode::Json) => println!("null"),
            (None, OutputMode::Human) => println!("Nobody is logged in."),
        },
    }
    Ok(())
}
