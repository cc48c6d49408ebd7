//! Check command - one-shot answer check

use conjuga::core::models::{Person, Tense};
use conjuga::core::services::evaluate;
use conjuga::output::AnswerResult;

use super::Context;

/// Check one answer, recording it when a student is logged in
pub fn check(ctx: &Context, verb: &str, tense: Tense, person: Person, answer: &str) -> anyhow::Result<()> {
    let mut book = ctx.open();
    let question = book.question(verb, tense, person)?;

    let result = if book.active_student().is_some() {
        AnswerResult {
            feedback: book.submit(&question, answer)?,
            recorded: true,
        }
    } else {
        AnswerResult {
            feedback: evaluate(&question, answer),
            recorded: false,
        }
    };

    result.render(ctx.mode);
    Ok(())
}
