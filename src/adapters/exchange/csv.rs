//! CSV export and import
//!
//! Every exported value is wrapped in double quotes with internal quotes
//! doubled. Rows are joined by `\n`.

use log::debug;

use super::ParsedImport;
use crate::core::models::{ConjugationClass, PracticeAttempt, VerbDefinition};
use crate::core::services::ClassRow;

/// Columns of the per-student results export
pub const RESULTS_HEADER: [&str; 8] = [
    "timestamp",
    "student",
    "verb",
    "tense",
    "person",
    "expected",
    "submitted",
    "correct",
];

/// Columns of the class summary export
pub const CLASS_HEADER: [&str; 5] = ["student", "total", "correct", "accuracy", "last_attempt"];

/// Columns accepted by the verb import
pub const VERB_HEADER: [&str; 4] = ["infinitive", "meaning", "type", "tags"];

/// Quote one field: `say "hi"` → `"say ""hi"""`
#[must_use]
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header line followed by quoted data rows
#[must_use]
pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    std::iter::once(header.join(","))
        .chain(rows.iter().map(|row| row.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-student results, one row per attempt
#[must_use]
pub fn results_csv(attempts: &[&PracticeAttempt]) -> String {
    let rows: Vec<Vec<String>> = attempts
        .iter()
        .map(|a| {
            vec![
                a.timestamp.to_rfc3339(),
                a.student.clone(),
                a.verb.clone(),
                a.tense.to_string(),
                a.person.pronoun().to_string(),
                a.expected.clone(),
                a.submitted.clone(),
                a.correct.to_string(),
            ]
        })
        .collect();
    to_csv(&RESULTS_HEADER, &rows)
}

/// Class summary, one row per student
#[must_use]
pub fn class_csv(summary: &[ClassRow]) -> String {
    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.total.to_string(),
                r.correct.to_string(),
                r.accuracy.to_string(),
                r.last_attempt.map(|t| t.to_rfc3339()).unwrap_or_default(),
            ]
        })
        .collect();
    to_csv(&CLASS_HEADER, &rows)
}

/// Split one CSV record into fields, honoring quotes and doubled quotes
#[must_use]
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            },
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            other => field.push(other),
        }
    }
    fields.push(field);
    fields
}

/// Group physical lines into records
///
/// A line break inside a quoted field continues the record on the next line.
/// An unterminated quote runs to the end of the text.
fn records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut pending = String::new();
    let mut quotes = 0usize;

    for line in text.lines() {
        if quotes % 2 == 1 {
            pending.push('\n');
        }
        pending.push_str(line);
        quotes += line.matches('"').count();
        if quotes % 2 == 0 {
            records.push(std::mem::take(&mut pending));
            quotes = 0;
        }
    }
    if !pending.is_empty() {
        records.push(pending);
    }
    records
}

/// Parse `infinitive,meaning,type,tags` rows
///
/// A leading header row is recognized and dropped. `type` may be blank when
/// the infinitive's ending implies the class. Tags are `;`-separated. Quoted
/// fields may span lines.
#[must_use]
pub fn parse_verbs(text: &str) -> ParsedImport {
    let mut parsed = ParsedImport::default();
    let mut rows = records(super::strip_bom(text))
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .peekable();

    if let Some(first) = rows.peek()
        && split_record(first)
            .first()
            .is_some_and(|f| f.trim().eq_ignore_ascii_case(VERB_HEADER[0]))
    {
        rows.next();
    }

    for row in rows {
        match parse_row(&split_record(&row)) {
            Some(verb) => parsed.verbs.push(verb),
            None => {
                debug!("Skipping malformed CSV row: {row}");
                parsed.skipped += 1;
            },
        }
    }
    parsed
}

fn parse_row(fields: &[String]) -> Option<VerbDefinition> {
    let infinitive = fields.first()?.trim();
    if infinitive.is_empty() {
        return None;
    }
    let meaning = fields.get(1).map_or("", |f| f.trim());
    let class = match fields.get(2).map(|f| f.trim()).filter(|f| !f.is_empty()) {
        Some(raw) => raw.parse::<ConjugationClass>().ok()?,
        None => ConjugationClass::infer(infinitive)?,
    };
    let tags = fields
        .get(3)
        .map(|f| f.split(';').map(str::trim).filter(|t| !t.is_empty()).collect::<Vec<_>>())
        .unwrap_or_default();

    let verb = VerbDefinition::new(infinitive, class).with_meaning(meaning).with_tags(tags);
    if let Some(reason) = verb.problem() {
        debug!("Rejecting '{infinitive}': {reason}");
        return None;
    }
    Some(verb)
}
