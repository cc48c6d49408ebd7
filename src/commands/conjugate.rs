//! Conjugate command - print resolved forms

use conjuga::Error;
use conjuga::core::models::Tense;
use conjuga::core::services::conjugate_all;
use conjuga::output::ConjugationResult;

use super::Context;

/// Print a verb's forms, limited to `tenses` when any are given
pub fn conjugate(ctx: &Context, verb: &str, tenses: &[Tense]) -> anyhow::Result<()> {
    let book = ctx.open();
    let verb = book
        .bank()
        .get(verb)
        .cloned()
        .ok_or_else(|| Error::VerbNotFound(verb.trim().to_string()))?;

    let rows = conjugate_all(&verb)
        .into_iter()
        .filter(|row| tenses.is_empty() || tenses.contains(&row.tense))
        .collect();

    ConjugationResult { verb, rows }.render(ctx.mode);
    Ok(())
}
