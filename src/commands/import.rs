//! Import command - merge verbs from a file

use std::fs;
use std::path::Path;

use anyhow::Context as _;

use conjuga::adapters::exchange;
use conjuga::output::ImportResult;

use super::Context;

/// Merge a JSON or CSV verb file into the bank
pub fn import(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let parsed = exchange::parse_verbs(&text);

    let mut book = ctx.open();
    let mut report = book.import(parsed.verbs);
    report.skipped += parsed.skipped;

    ImportResult {
        source: file.display().to_string(),
        report,
    }
    .render(ctx.mode);
    Ok(())
}
