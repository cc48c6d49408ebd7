//! Export command - CSV results and JSON verb bank

use std::fs;
use std::path::Path;

use anyhow::Context as _;

use conjuga::adapters::exchange::{csv, json};
use conjuga::core::services::class_summary;
use conjuga::output::OperationResult;

use super::{Context, resolve_student};
use crate::cli::ExportTarget;

/// Handle export subcommands
pub fn export(ctx: &Context, what: ExportTarget) -> anyhow::Result<()> {
    let book = ctx.open();
    match what {
        ExportTarget::Results { student, output } => {
            let (id, _) = resolve_student(&book, student.as_deref())?;
            let text = csv::results_csv(&book.attempts_for(&id));
            emit(ctx, &text, output.as_deref())
        },
        ExportTarget::Class { output } => {
            let text = csv::class_csv(&class_summary(book.attempts(), book.roster()));
            emit(ctx, &text, output.as_deref())
        },
        ExportTarget::Verbs { output } => {
            let text = json::export_verbs(book.bank())?;
            emit(ctx, &text, output.as_deref())
        },
    }
}

/// Write to `output`, or print the document itself
fn emit(ctx: &Context, text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).with_context(|| format!("Failed to write {}", path.display()))?;
            OperationResult::ok(format!("Wrote {}", path.display())).render(ctx.mode);
        },
        None => println!("{text}"),
    }
    Ok(())
}
