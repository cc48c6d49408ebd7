//! Verbs command - manage the verb bank

use conjuga::Error;
use conjuga::core::models::{ConjugationClass, VerbDefinition};
use conjuga::core::services::{Action, conjugate_all};
use conjuga::output::{ConjugationResult, OperationResult, VerbInfo, VerbListResult};

use super::{Book, Context};
use crate::cli::VerbsAction;

/// Handle verbs subcommands
pub fn verbs(ctx: &Context, action: VerbsAction) -> anyhow::Result<()> {
    let mut book = ctx.open();
    match action {
        VerbsAction::List { tag } => {
            let verbs: Vec<VerbInfo> =
                book.bank().pool(tag.as_deref()).into_iter().map(VerbInfo::from).collect();
            VerbListResult {
                total: verbs.len(),
                verbs,
            }
            .render(ctx.mode);
        },
        VerbsAction::Show { verb } => {
            let verb = find(&book, &verb)?;
            let rows = conjugate_all(&verb);
            ConjugationResult { verb, rows }.render(ctx.mode);
        },
        VerbsAction::Add {
            infinitive,
            class,
            meaning,
            tags,
        } => add(&mut book, ctx, &infinitive, class, meaning, tags)?,
        VerbsAction::Edit {
            infinitive,
            class,
            meaning,
            tags,
        } => {
            let mut verb = find(&book, &infinitive)?;
            if let Some(class) = class {
                verb.class = class;
            }
            if let Some(meaning) = meaning {
                verb.meaning = meaning;
            }
            if let Some(tags) = tags {
                verb.tags = tags;
            }
            book.dispatch(Action::UpdateVerb {
                infinitive: infinitive.clone(),
                verb,
            })?;
            OperationResult::ok(format!("Updated {infinitive}")).render(ctx.mode);
        },
        VerbsAction::Remove { infinitive } => {
            book.dispatch(Action::RemoveVerb {
                infinitive: infinitive.clone(),
            })?;
            OperationResult::ok(format!("Removed {infinitive}")).render(ctx.mode);
        },
        VerbsAction::Override {
            infinitive,
            tense,
            person,
            form,
        } => {
            book.dispatch(Action::SetOverride {
                infinitive: infinitive.clone(),
                tense,
                person,
                form: form.clone(),
            })?;
            let message = if form.trim().is_empty() {
                format!("Cleared {infinitive} {} {}", tense.spanish_name(), person.pronoun())
            } else {
                format!("{infinitive} {} {}: {}", tense.spanish_name(), person.pronoun(), form.trim())
            };
            OperationResult::ok(message).render(ctx.mode);
        },
        VerbsAction::ClearOverride {
            infinitive,
            tense,
            person,
        } => {
            book.dispatch(Action::ClearOverride {
                infinitive: infinitive.clone(),
                tense,
                person,
            })?;
            let message = format!("Cleared {infinitive} {} {}", tense.spanish_name(), person.pronoun());
            OperationResult::ok(message).render(ctx.mode);
        },
    }
    Ok(())
}

fn add(
    book: &mut Book,
    ctx: &Context,
    infinitive: &str,
    class: Option<ConjugationClass>,
    meaning: String,
    tags: Vec<String>,
) -> anyhow::Result<()> {
    let class = match class {
        Some(class) => class,
        None => ConjugationClass::infer(infinitive).ok_or_else(|| Error::InvalidVerb {
            infinitive: infinitive.to_string(),
            reason: "cannot tell its type, pass --type".to_string(),
        })?,
    };
    let verb = VerbDefinition::new(infinitive, class).with_meaning(meaning).with_tags(tags);
    book.dispatch(Action::AddVerb(verb))?;
    OperationResult::ok(format!("Added {} ({class})", infinitive.trim().to_lowercase())).render(ctx.mode);
    Ok(())
}

fn find(book: &Book, infinitive: &str) -> conjuga::Result<VerbDefinition> {
    book.bank()
        .get(infinitive)
        .cloned()
        .ok_or_else(|| Error::VerbNotFound(infinitive.trim().to_string()))
}
