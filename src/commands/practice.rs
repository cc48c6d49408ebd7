//! Practice command - interactive drill on stdin

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::debug;

use conjuga::Error;
use conjuga::adapters::OsRandom;
use conjuga::core::models::Tense;
use conjuga::core::services::{Action, accuracy};
use conjuga::output::{AnswerResult, OutputMode, PracticeSummary};

use super::Context;

/// Typed on its own line to end the session
const QUIT: &str = ":q";

/// Ask questions until `count` is reached, `:q` is typed, or stdin closes
pub fn practice(
    ctx: &Context,
    tenses: Vec<Tense>,
    tag: Option<&str>,
    count: Option<usize>,
    student: Option<&str>,
) -> anyhow::Result<()> {
    let mut book = ctx.open();
    if let Some(name) = student {
        book.dispatch(Action::Login {
            name: name.to_string(),
        })?;
    }
    let name = book
        .active_student()
        .map(|s| s.name.clone())
        .ok_or(Error::NoActiveStudent)?;
    if !tenses.is_empty() {
        book.dispatch(Action::SelectTenses(tenses))?;
    }

    let selected: Vec<Tense> = book.selection().tenses().to_vec();
    if ctx.mode == OutputMode::Human {
        let names: Vec<&str> = selected.iter().map(|t| t.spanish_name()).collect();
        println!(
            "{} practicing {}. Type {QUIT} to stop.\n",
            name.bold(),
            names.join(", ")
        );
    }

    let mut rng = OsRandom::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answered = 0;
    let mut correct = 0;

    while count.is_none_or(|n| answered < n) {
        let question = book.draw(tag, &mut rng)?;
        if ctx.mode == OutputMode::Human {
            print!("{} > ", question.prompt());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("stdin closed");
            break;
        };
        let line = line?;
        if line.trim() == QUIT {
            break;
        }

        let feedback = book.submit(&question, &line)?;
        answered += 1;
        if feedback.correct {
            correct += 1;
        }
        AnswerResult {
            feedback,
            recorded: true,
        }
        .render(ctx.mode);
    }

    PracticeSummary {
        tenses: selected,
        answered,
        correct,
        accuracy: accuracy(correct, answered),
    }
    .render(ctx.mode);
    Ok(())
}
