//! JSON export and import of the verb bank

use log::warn;
use serde_json::Value;

use super::ParsedImport;
use crate::core::models::VerbDefinition;
use crate::core::services::VerbBank;

/// The bank as an indented JSON array (re-importable)
pub fn export_verbs(bank: &VerbBank) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(bank.verbs())?)
}

/// Parse a JSON array of verb definitions, skipping records that don't fit
#[must_use]
pub fn parse_verbs(text: &str) -> ParsedImport {
    let records = match serde_json::from_str::<Vec<Value>>(super::strip_bom(text)) {
        Ok(records) => records,
        Err(e) => {
            warn!("Import is not a JSON array of records: {e}");
            return ParsedImport {
                verbs: Vec::new(),
                skipped: 1,
            };
        },
    };

    let mut parsed = ParsedImport::default();
    for record in records {
        match serde_json::from_value::<VerbDefinition>(record) {
            Ok(verb) => parsed.verbs.push(verb),
            Err(e) => {
                warn!("Skipping malformed verb record: {e}");
                parsed.skipped += 1;
            },
        }
    }
    parsed
}
